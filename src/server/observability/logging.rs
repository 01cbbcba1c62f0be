//! Console logging and the once-only rotating file layer.
//!
//! The global subscriber is installed at process start with an empty reloadable slot.
//! [`LogInstaller::install`] fills that slot with the rotating file layer after
//! extensions are up; the slot can only be filled once, so re-running the installer
//! never duplicates file output.

use std::{fmt, sync::OnceLock};

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::server::{
    config::ConfigProfile, error::startup::ObservabilityError,
    observability::rotating::RotatingFileWriter,
};

/// Reloadable slot that holds the file layer once attached.
pub type FileLayerSlot = Option<Box<dyn Layer<Registry> + Send + Sync>>;
pub type FileLayerHandle = reload::Handle<FileLayerSlot, Registry>;

/// Installs the global subscriber: console output filtered by `RUST_LOG` (default
/// `info`) plus an empty slot for the file layer.
///
/// # Returns
/// - `LogInstaller` - Handle used later to attach the rotating file layer
pub fn init_subscriber() -> LogInstaller {
    let (file_slot, handle) = reload::Layer::new(FileLayerSlot::None);

    tracing_subscriber::registry()
        .with(file_slot)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    LogInstaller::new(handle)
}

/// Outcome of [`LogInstaller::install`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLogging {
    /// Debug or testing profile; only console logging is active.
    Skipped,
    Attached,
    /// A previous install already attached the file layer.
    AlreadyAttached,
}

pub struct LogInstaller {
    handle: FileLayerHandle,
    guard: OnceLock<WorkerGuard>,
}

impl LogInstaller {
    pub fn new(handle: FileLayerHandle) -> Self {
        Self {
            handle,
            guard: OnceLock::new(),
        }
    }

    /// Attaches the rotating file layer described by the profile's log settings.
    ///
    /// Skipped entirely when the profile is in debug or testing mode. The log directory
    /// is created when missing. Once the slot holds a layer, later calls leave it alone.
    ///
    /// # Arguments
    /// - `config` - Resolved configuration profile
    ///
    /// # Returns
    /// - `Ok(FileLogging)` - Whether a layer was attached by this call
    /// - `Err(ObservabilityError)` - Directory or file could not be created, or the
    ///   subscriber owning the slot is gone
    pub fn install(&self, config: &ConfigProfile) -> Result<FileLogging, ObservabilityError> {
        if config.debug || config.testing {
            return Ok(FileLogging::Skipped);
        }
        if self.rotating_handler_count() > 0 {
            return Ok(FileLogging::AlreadyAttached);
        }

        let settings = &config.log;
        std::fs::create_dir_all(&settings.directory).map_err(|source| {
            ObservabilityError::LogDirectory {
                path: settings.directory.clone(),
                source,
            }
        })?;

        let path = settings.directory.join(&settings.file_name);
        let writer = RotatingFileWriter::open(&path, settings.max_bytes, settings.backup_count)
            .map_err(|source| ObservabilityError::LogFile {
                path: path.clone(),
                source,
            })?;
        let (writer, guard) = tracing_appender::non_blocking(writer);

        let layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(writer)
            .boxed();

        let mut pending = Some(layer);
        self.handle.modify(|slot| {
            if slot.is_none() {
                *slot = pending.take();
            }
        })?;

        if pending.is_some() {
            return Ok(FileLogging::AlreadyAttached);
        }

        let _ = self.guard.set(guard);
        tracing::info!("Writing logs to {}", path.display());

        Ok(FileLogging::Attached)
    }

    /// Number of rotating file layers currently attached, 0 or 1.
    pub fn rotating_handler_count(&self) -> usize {
        self.handle
            .with_current(|slot| usize::from(slot.is_some()))
            .unwrap_or(0)
    }
}

/// `<timestamp> level=<LEVEL> logger=<target> msg=<message and fields>`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} level={} logger={} msg=",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            meta.level(),
            meta.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
