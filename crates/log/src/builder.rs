//! Logger builder implementation

use tracing_subscriber::fmt::{self, TestWriter, writer::BoxMakeWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DisplayConfig, Format, Writer};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger builder
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: Config,
}

/// Returned by the `init*` functions.
///
/// The subscriber is global and stays installed for the life of the
/// process; the guard only reports whether this call installed it.
#[derive(Debug)]
#[must_use = "the guard reports whether a subscriber was installed"]
pub struct LoggerGuard {
    installed: bool,
}

/// Boxes a fmt layer, dropping the timer when timestamps are disabled.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $display:expr) => {
        if $display.time {
            $layer.boxed()
        } else {
            $layer.without_time().boxed()
        }
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Overrides the filter directives.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    #[must_use]
    pub fn with_writer(mut self, writer: Writer) -> Self {
        self.config.writer = writer;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let layer = fmt_layer(&self.config).with_filter(filter);

        tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        Ok(LoggerGuard { installed: true })
    }
}

impl LoggerGuard {
    pub(crate) fn noop() -> Self {
        Self { installed: false }
    }

    /// `false` when a subscriber was already in place.
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        Writer::Test => BoxMakeWriter::new(TestWriter::default()),
    }
}

fn fmt_layer(config: &Config) -> BoxedLayer {
    let display: &DisplayConfig = &config.display;
    let base = fmt::layer()
        .with_writer(make_writer(config.writer))
        .with_target(display.target)
        .with_file(display.source)
        .with_line_number(display.source);

    match config.format {
        Format::Pretty => boxed_fmt_layer!(base.pretty().with_ansi(display.colors), display),
        Format::Compact => boxed_fmt_layer!(base.compact().with_ansi(display.colors), display),
        Format::Json => boxed_fmt_layer!(
            base.json()
                .with_ansi(false)
                .flatten_event(display.flatten)
                .with_current_span(true)
                .with_span_list(true),
            display
        ),
    }
}
