use serde::{Deserialize, Serialize};

/// Runtime events a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    AnimationFinish,
    Click,
    Error,
    #[serde(rename = "onmouseover")]
    MouseOver,
    #[serde(rename = "onmouseout")]
    MouseOut,
    Page,
    Ready,
    #[serde(rename = "regionClick")]
    RegionClick,
    Select,
    Sort,
}

impl EventType {
    pub const ALL: [Self; 10] = [
        Self::AnimationFinish,
        Self::Click,
        Self::Error,
        Self::MouseOver,
        Self::MouseOut,
        Self::Page,
        Self::Ready,
        Self::RegionClick,
        Self::Select,
        Self::Sort,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnimationFinish => "animationfinish",
            Self::Click => "click",
            Self::Error => "error",
            Self::MouseOver => "onmouseover",
            Self::MouseOut => "onmouseout",
            Self::Page => "page",
            Self::Ready => "ready",
            Self::RegionClick => "regionClick",
            Self::Select => "select",
            Self::Sort => "sort",
        }
    }
}

/// Listener bound to a chart event. `function` is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListener {
    pub event: EventType,
    pub function: String,
    #[serde(default)]
    pub once: bool,
}

/// Ordered listeners of one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    listeners: Vec<EventListener>,
}

impl Events {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, event: EventType, function: impl Into<String>) -> &mut Self {
        self.listeners.push(EventListener {
            event,
            function: function.into(),
            once: false,
        });
        self
    }

    /// Listener removed by the runtime after its first call.
    pub fn add_one_time_listener(
        &mut self,
        event: EventType,
        function: impl Into<String>,
    ) -> &mut Self {
        self.listeners.push(EventListener {
            event,
            function: function.into(),
            once: true,
        });
        self
    }

    pub fn push(&mut self, listener: EventListener) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    #[must_use]
    pub fn listeners(&self) -> &[EventListener] {
        &self.listeners
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Registration statements for `chart_name`, in insertion order.
    #[must_use]
    pub fn draw(&self, chart_name: &str) -> String {
        self.listeners
            .iter()
            .map(|listener| {
                let method = if listener.once {
                    "addOneTimeListener"
                } else {
                    "addListener"
                };
                format!(
                    "google.visualization.events.{method}({chart_name}, '{}', {});",
                    listener.event.as_str(),
                    listener.function
                )
            })
            .collect()
    }
}
