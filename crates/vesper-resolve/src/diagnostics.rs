use miette::Diagnostic;

use crate::error::{ResolutionError, ResolverWarning};

/// Where the resolver sends what it finds. Formatting is the sink's business.
pub trait DiagnosticSink {
    fn report(&mut self, error: ResolutionError);
    fn warn(&mut self, warning: ResolverWarning);
}

/// A diagnostic in the order it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Error(ResolutionError),
    Warning(ResolverWarning),
}

impl Emitted {
    pub fn as_diagnostic(&self) -> &dyn Diagnostic {
        match self {
            Emitted::Error(error) => error as &dyn Diagnostic,
            Emitted::Warning(warning) => warning as &dyn Diagnostic,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Emitted::Error(_))
    }
}

/// Collecting sink that keeps every diagnostic in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    emitted: Vec<Emitted>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.emitted.iter().any(Emitted::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ResolutionError> {
        self.emitted.iter().filter_map(|emitted| match emitted {
            Emitted::Error(error) => Some(error),
            Emitted::Warning(_) => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ResolverWarning> {
        self.emitted.iter().filter_map(|emitted| match emitted {
            Emitted::Warning(warning) => Some(warning),
            Emitted::Error(_) => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emitted> {
        self.emitted.iter()
    }

    /// One line per diagnostic, prefixed by its severity.
    pub fn render(&self) -> String {
        self.emitted
            .iter()
            .map(|emitted| match emitted {
                Emitted::Error(error) => format!("error: {error}\n"),
                Emitted::Warning(warning) => format!("warning: {warning}\n"),
            })
            .collect()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, error: ResolutionError) {
        self.emitted.push(Emitted::Error(error));
    }

    fn warn(&mut self, warning: ResolverWarning) {
        self.emitted.push(Emitted::Warning(warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::SourceSpan;

    fn span() -> SourceSpan {
        SourceSpan::from((4, 2))
    }

    #[test]
    fn warnings_alone_are_not_errors() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(ResolverWarning::UnreachableCode { span: span() });
        assert!(!diagnostics.has_errors());
        diagnostics.report(ResolutionError::TopLevelReturn { span: span() });
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(diagnostics.warnings().count(), 1);
    }

    #[test]
    fn emitted_exposes_miette_diagnostic() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(ResolutionError::EmptyLoopBody { span: span() });
        let codes: Vec<_> = diagnostics
            .iter()
            .filter_map(|emitted| emitted.as_diagnostic().code().map(|code| code.to_string()))
            .collect();
        assert_eq!(codes, vec!["vesper_resolve::empty_loop_body".to_string()]);
        let labels: Vec<_> = diagnostics
            .iter()
            .flat_map(|emitted| emitted.as_diagnostic().labels().into_iter().flatten())
            .map(|label| *label.inner())
            .collect();
        assert_eq!(labels, vec![span()]);
    }
}
