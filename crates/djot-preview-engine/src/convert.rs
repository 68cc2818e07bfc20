//! # Conversion Dispatch
//!
//! Source text to HTML with a guaranteed result. The primary path parses and
//! renders; if it is unavailable or fails in any way, including a panic, the
//! fallback converter produces the HTML instead and the failure is reported
//! alongside it.
//!
//! ```text
//! Unattempted ──available──▶ PrimaryPath ──ok──▶ Done
//!      │                          │
//!      └──unavailable──▶ FallbackPath ◀──error──┘
//!                             │
//!                             └──▶ Done
//! ```

use std::{any::Any, fmt, panic};

use crate::{fallback::fallback_convert, parsing::parse_document, render::render};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Primary converter unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("Render error: {0}")]
    Render(#[from] fmt::Error),
    #[error("Primary converter panicked: {message}")]
    Panicked { message: String },
}

/// Whether the primary parse-and-render path may be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    Available,
    Unavailable(String),
}

/// Which path produced a conversion's HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    Primary,
    Fallback,
}

/// The outcome of one conversion. `html` is always usable.
#[derive(Debug)]
pub struct Conversion {
    pub html: String,
    pub path: ConversionPath,
    /// Why the primary path was not used, if it was not.
    pub error: Option<ConvertError>,
}

/// Signature of the primary pipeline.
pub type Pipeline = fn(&str) -> Result<String, fmt::Error>;

fn parse_and_render(source: &str) -> Result<String, fmt::Error> {
    render(&parse_document(source))
}

/// Converts source text with the primary path when available and the
/// fallback otherwise.
///
/// Holds no mutable state, so one converter can be shared across threads.
#[derive(Clone)]
pub struct Converter {
    primary: Primary,
    pipeline: Pipeline,
}

#[derive(Debug)]
enum Dispatch {
    Unattempted,
    PrimaryPath,
    FallbackPath(Option<ConvertError>),
    Done(Conversion),
}

impl Dispatch {
    fn name(&self) -> &'static str {
        match self {
            Dispatch::Unattempted => "unattempted",
            Dispatch::PrimaryPath => "primary",
            Dispatch::FallbackPath(_) => "fallback",
            Dispatch::Done(_) => "done",
        }
    }
}

impl Converter {
    /// A converter with the primary path available.
    pub fn new() -> Self {
        Self {
            primary: Primary::Available,
            pipeline: parse_and_render,
        }
    }

    /// A converter that always uses the fallback, reporting `reason`.
    pub fn fallback_only(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::info!("primary converter unavailable: {reason}");
        Self {
            primary: Primary::Unavailable(reason),
            pipeline: parse_and_render,
        }
    }

    /// Replaces the primary pipeline, e.g. to wrap the renderer.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn primary(&self) -> &Primary {
        &self.primary
    }

    pub fn convert(&self, source: &str) -> Conversion {
        let mut state = Dispatch::Unattempted;
        loop {
            let from = state.name();
            state = match state {
                Dispatch::Unattempted => match &self.primary {
                    Primary::Available => Dispatch::PrimaryPath,
                    Primary::Unavailable(reason) => {
                        Dispatch::FallbackPath(Some(ConvertError::Unavailable {
                            reason: reason.clone(),
                        }))
                    }
                },
                Dispatch::PrimaryPath => match self.run_primary(source) {
                    Ok(html) => Dispatch::Done(Conversion {
                        html,
                        path: ConversionPath::Primary,
                        error: None,
                    }),
                    Err(err) => {
                        log::warn!("primary conversion failed, using fallback: {err}");
                        Dispatch::FallbackPath(Some(err))
                    }
                },
                Dispatch::FallbackPath(error) => Dispatch::Done(Conversion {
                    html: fallback_convert(source),
                    path: ConversionPath::Fallback,
                    error,
                }),
                Dispatch::Done(conversion) => {
                    log::debug!(
                        "converted {} bytes to {} bytes via {:?}",
                        source.len(),
                        conversion.html.len(),
                        conversion.path
                    );
                    return conversion;
                }
            };
            log::debug!("conversion: {from} -> {}", state.name());
        }
    }

    /// Converts and returns only the HTML.
    pub fn to_html(&self, source: &str) -> String {
        self.convert(source).html
    }

    /// Runs the primary pipeline, turning a panic into an error.
    fn run_primary(&self, source: &str) -> Result<String, ConvertError> {
        let pipeline = self.pipeline;
        match panic::catch_unwind(|| pipeline(source)) {
            Ok(result) => Ok(result?),
            Err(payload) => Err(ConvertError::Panicked {
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("primary", &self.primary)
            .finish_non_exhaustive()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Converts `source` with the primary path available. Never fails.
pub fn convert(source: &str) -> Conversion {
    Converter::new().convert(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn panicking(_: &str) -> Result<String, fmt::Error> {
        panic!("boom")
    }

    fn failing(_: &str) -> Result<String, fmt::Error> {
        Err(fmt::Error)
    }

    #[test]
    fn primary_path_by_default() {
        let c = convert("# Title\n\nSome *bold* and `code`.");
        assert_eq!(c.path, ConversionPath::Primary);
        assert!(c.error.is_none());
        assert_eq!(
            c.html.replace('\n', ""),
            "<h1>Title</h1><p>Some <strong>bold</strong> and <code>code</code>.</p>"
        );
    }

    #[test]
    fn unavailable_primary_uses_fallback() {
        let c = Converter::fallback_only("disabled").convert("*a*");
        assert_eq!(c.path, ConversionPath::Fallback);
        assert_eq!(c.html, "<p><strong>a</strong></p>\n");
        assert!(matches!(
            c.error,
            Some(ConvertError::Unavailable { ref reason }) if reason == "disabled"
        ));
    }

    #[test]
    fn panic_falls_back() {
        let c = Converter::new().with_pipeline(panicking).convert("###### x");
        assert_eq!(c.path, ConversionPath::Fallback);
        assert_eq!(c.html, "<h6>x</h6>\n");
        match c.error {
            Some(ConvertError::Panicked { message }) => assert_eq!(message, "boom"),
            other => panic!("expected a caught panic, got {other:?}"),
        }
    }

    #[test]
    fn render_error_falls_back() {
        let c = Converter::new().with_pipeline(failing).convert("x");
        assert_eq!(c.path, ConversionPath::Fallback);
        assert!(matches!(c.error, Some(ConvertError::Render(_))));
        assert_eq!(c.html, "<p>x</p>\n");
    }

    #[rstest]
    #[case("")]
    #[case("*")]
    #[case("_")]
    #[case("***")]
    #[case("{=")]
    #[case("[")]
    #[case("`")]
    #[case(">")]
    #[case("|")]
    #[case("[^")]
    fn degenerate_input_stays_on_primary(#[case] src: &str) {
        let c = convert(src);
        assert_eq!(c.path, ConversionPath::Primary);
        assert!(c.error.is_none());
    }

    #[test]
    fn conversion_is_deterministic() {
        let src = "- a[^n]\n- b\n\n[^n]: note";
        assert_eq!(convert(src).html, convert(src).html);
    }

    #[test]
    fn converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }

    #[test]
    fn error_messages() {
        let err = ConvertError::Unavailable {
            reason: "offline".into(),
        };
        assert_eq!(err.to_string(), "Primary converter unavailable: offline");
    }
}
