//! The per-round processing driver.

use crate::{check_type, compile_specs, constraint_meta, validate_accessor, SlotKind};
use warden_core::well_known::{
    ATTR_PARAMETER_TYPES, ATTR_RETURN_TYPES, CHECKED_ACCESSOR, CHECKED_METHOD,
};
use warden_core::{DiagnosticSink, Diagnostics};
use warden_model::{AnnotationUse, ProgramModel};
use warden_registry::OverrideRegistry;

/// Drives one processing round.
///
/// For every annotation type in the round, the governing constraint
/// declaration is resolved through the override registry, its allow-lists
/// are compiled into matchers, and every annotated use-site is checked.
/// Diagnostics accumulate; a failing use-site never stops the round.
pub struct Processor<'m, M: ProgramModel> {
    model: &'m M,
    overrides: &'m OverrideRegistry,
}

impl<'m, M: ProgramModel> Processor<'m, M> {
    /// Create a processor over the given model and session overrides.
    pub fn new(model: &'m M, overrides: &'m OverrideRegistry) -> Self {
        Self { model, overrides }
    }

    /// Process every given annotation type and return the round's findings.
    pub fn run<S: AsRef<str>>(&self, annotations: &[S]) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for annotation in annotations {
            let annotation = annotation.as_ref();
            if let Some(meta) =
                constraint_meta(self.model, self.overrides, annotation, CHECKED_METHOD)
            {
                self.check_methods(annotation, meta, &mut diagnostics);
            }
            if constraint_meta(self.model, self.overrides, annotation, CHECKED_ACCESSOR)
                .is_some()
            {
                self.check_accessors(annotation, &mut diagnostics);
            }
        }
        diagnostics
    }

    /// Like `run`, but streams findings into a host-owned sink.
    pub fn run_into<S: AsRef<str>>(&self, annotations: &[S], sink: &mut dyn DiagnosticSink) {
        for diagnostic in self.run(annotations) {
            sink.emit(diagnostic);
        }
    }

    fn check_methods(
        &self,
        annotation: &str,
        meta: &AnnotationUse,
        diagnostics: &mut Diagnostics,
    ) {
        // An absent attribute is an empty allow-list
        let return_specs = meta
            .attr(ATTR_RETURN_TYPES)
            .and_then(|v| v.as_types())
            .unwrap_or_default();
        let param_specs = meta
            .attr(ATTR_PARAMETER_TYPES)
            .and_then(|v| v.as_types())
            .unwrap_or_default();

        // Matchers are compiled once per annotation type per round
        let return_matchers = compile_specs(self.model, return_specs);
        let param_matchers = compile_specs(self.model, param_specs);

        for method in self.model.annotated_methods(annotation) {
            if let Err(diagnostic) = check_type(
                self.model,
                &method.return_type,
                &return_matchers,
                SlotKind::Return,
            ) {
                diagnostics.push(attributed(
                    diagnostic,
                    method.path(),
                    method.loc.clone(),
                ));
            }
            for param in &method.params {
                if let Err(diagnostic) =
                    check_type(self.model, &param.ty, &param_matchers, SlotKind::Parameter)
                {
                    let loc = param.loc.clone().or_else(|| method.loc.clone());
                    diagnostics.push(attributed(diagnostic, method.param_path(param), loc));
                }
            }
        }
    }

    fn check_accessors(&self, annotation: &str, diagnostics: &mut Diagnostics) {
        for method in self.model.annotated_methods(annotation) {
            diagnostics.merge(validate_accessor(method));
        }
    }
}

fn attributed(
    diagnostic: warden_core::Diagnostic,
    origin: String,
    loc: Option<warden_core::SourceLoc>,
) -> warden_core::Diagnostic {
    let diagnostic = diagnostic.with_origin(origin);
    match loc {
        Some(loc) => diagnostic.with_loc(loc),
        None => diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use warden_core::well_known::{ATTR_VALUE, OVERRIDE_FOR};
    use warden_core::TypeRef;
    use warden_model::{AttrValue, ProgramIndexBuilder};
    use warden_registry::OverrideLoader;

    const MARKED: &str = "com.example.Marked";
    const MARKED_OVERRIDE: &str = "com.example.MarkedOverride";

    fn checked_method_meta(return_types: Vec<TypeRef>) -> AnnotationUse {
        AnnotationUse::new(CHECKED_METHOD)
            .with_attr(ATTR_RETURN_TYPES, AttrValue::Types(return_types))
    }

    #[test]
    fn test_override_metadata_governs_instead_of_the_annotations_own() {
        // GIVEN - @Marked allows String returns, its override allows Integer
        let mut builder = ProgramIndexBuilder::new();
        builder
            .add_type(MARKED)
            .annotate(checked_method_meta(vec![TypeRef::declared(
                "java.lang.String",
            )]))
            .done()
            .unwrap();
        builder
            .add_type(MARKED_OVERRIDE)
            .annotate(
                AnnotationUse::new(OVERRIDE_FOR)
                    .with_attr(ATTR_VALUE, AttrValue::Type(TypeRef::declared(MARKED))),
            )
            .annotate(checked_method_meta(vec![TypeRef::declared(
                "java.lang.Integer",
            )]))
            .done()
            .unwrap();
        builder
            .add_method("com.example.Svc", "answer")
            .returns(TypeRef::declared("java.lang.Integer"))
            .annotate(MARKED)
            .done();
        let model = builder.build();

        // WHEN - without the override the Integer return is rejected
        let no_overrides = OverrideRegistry::empty();
        let findings = Processor::new(&model, &no_overrides).run(&[MARKED]);
        assert!(findings.has_errors());

        // WHEN - with the override registered, its metadata governs
        let mut diagnostics = Diagnostics::new();
        let mut loader = OverrideLoader::new(&model);
        loader.load(MARKED_OVERRIDE, &mut diagnostics);
        let overrides = loader.finish();
        let findings = Processor::new(&model, &overrides).run(&[MARKED]);

        // THEN
        assert!(findings.is_empty());
    }

    #[test]
    fn test_override_can_supply_meta_annotations_the_target_lacks() {
        // GIVEN - @Marked declares no constraints at all; the override does
        let mut builder = ProgramIndexBuilder::new();
        builder.add_type(MARKED).done().unwrap();
        builder
            .add_type(MARKED_OVERRIDE)
            .annotate(
                AnnotationUse::new(OVERRIDE_FOR)
                    .with_attr(ATTR_VALUE, AttrValue::Type(TypeRef::declared(MARKED))),
            )
            .annotate(checked_method_meta(vec![TypeRef::void()]))
            .done()
            .unwrap();
        builder
            .add_method("com.example.Svc", "bad")
            .returns(TypeRef::primitive("int"))
            .annotate(MARKED)
            .done();
        let model = builder.build();

        // WHEN - no override: nothing to check, no findings
        let no_overrides = OverrideRegistry::empty();
        assert!(Processor::new(&model, &no_overrides).run(&[MARKED]).is_empty());

        // WHEN - override registered: the method check applies
        let mut diagnostics = Diagnostics::new();
        let mut loader = OverrideLoader::new(&model);
        loader.load(MARKED_OVERRIDE, &mut diagnostics);
        let overrides = loader.finish();
        let findings = Processor::new(&model, &overrides).run(&[MARKED]);

        // THEN
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings.all()[0].message,
            "Invalid return type: 'int' must be one of: [void]"
        );
    }

    #[test]
    fn test_parameter_failures_attach_to_the_parameter() {
        // GIVEN - @Marked(parameterTypes = [Integer])
        let mut builder = ProgramIndexBuilder::new();
        builder
            .add_type(MARKED)
            .annotate(
                AnnotationUse::new(CHECKED_METHOD)
                    .with_attr(
                        ATTR_RETURN_TYPES,
                        AttrValue::Types(vec![TypeRef::void()]),
                    )
                    .with_attr(
                        ATTR_PARAMETER_TYPES,
                        AttrValue::Types(vec![TypeRef::declared("java.lang.Integer")]),
                    ),
            )
            .done()
            .unwrap();
        builder
            .add_method("com.example.Svc", "handle")
            .param("value", TypeRef::declared("java.lang.Integer"))
            .param("extra", TypeRef::declared("java.lang.String"))
            .annotate(MARKED)
            .done();
        let model = builder.build();

        // WHEN
        let no_overrides = OverrideRegistry::empty();
        let findings = Processor::new(&model, &no_overrides).run(&[MARKED]);

        // THEN - only the second parameter fails, attributed to it
        assert_eq!(findings.len(), 1);
        let diagnostic = &findings.all()[0];
        assert_eq!(
            diagnostic.origin.as_deref(),
            Some("com.example.Svc.handle.extra")
        );
        assert_eq!(
            diagnostic.message,
            "Invalid parameter type: 'java.lang.String' must be one of: [java.lang.Integer]"
        );
    }
}
