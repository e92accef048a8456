use crate::core::color::ColorScheme;
use crate::core::models::analysis::Analysis;
use super::viewer::StylingMode;

/// Notifications a viewer session emits for the surrounding UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A structure finished loading.
    AnalysisReady(Analysis),
    SchemeApplied {
        scheme: ColorScheme,
        mode: StylingMode,
    },
    BackgroundChanged { high_contrast: bool },
    FontSizeChanged { percent: u16 },
}

pub type EventCallback<'a> = Box<dyn Fn(SessionEvent) + Send + Sync + 'a>;

#[derive(Default)]
pub struct EventReporter<'a> {
    callback: Option<EventCallback<'a>>,
}

impl<'a> EventReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: EventCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: SessionEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
