//! GPU debug-message logger.
//!
//! wgpu reports validation and device errors through an uncaptured-error
//! callback. Each report is decoded into source / type / severity and written
//! to the `log` facade.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Subsystem a debug message originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
}

impl DebugSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DebugSource::Api => "API",
            DebugSource::WindowSystem => "WINDOW SYSTEM",
            DebugSource::ShaderCompiler => "SHADER COMPILER",
            DebugSource::ThirdParty => "THIRD PARTY",
            DebugSource::Application => "APP",
            DebugSource::Other => "OTHER",
        }
    }
}

/// Category of a debug message.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    Other,
}

impl DebugType {
    pub fn as_str(self) -> &'static str {
        match self {
            DebugType::Error => "ERROR",
            DebugType::DeprecatedBehavior => "DEPRECATED BEHAVIOR",
            DebugType::UndefinedBehavior => "UNDEFINED BEHAVIOR",
            DebugType::Portability => "PORTABILITY",
            DebugType::Performance => "PERFORMANCE",
            DebugType::Marker => "MARKER",
            DebugType::Other => "OTHER",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
}

impl DebugSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            DebugSeverity::Notification => "NOTIFICATION",
            DebugSeverity::Low => "LOW",
            DebugSeverity::Medium => "MEDIUM",
            DebugSeverity::High => "HIGH",
        }
    }

    pub fn log_level(self) -> log::Level {
        match self {
            DebugSeverity::Notification => log::Level::Debug,
            DebugSeverity::Low => log::Level::Info,
            DebugSeverity::Medium => log::Level::Warn,
            DebugSeverity::High => log::Level::Error,
        }
    }
}

impl fmt::Display for DebugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DebugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DebugSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded debug message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: DebugSource,
    pub kind: DebugType,
    pub severity: DebugSeverity,
    pub id: u32,
    pub text: String,
}

impl DebugMessage {
    /// Decodes a wgpu error report.
    pub fn from_error(err: &wgpu::Error, id: u32) -> Self {
        let (source, kind, severity) = match err {
            wgpu::Error::OutOfMemory { .. } => {
                (DebugSource::Api, DebugType::Error, DebugSeverity::High)
            }
            wgpu::Error::Validation { description, .. } => {
                let (source, kind) = classify_validation(description);
                (source, kind, DebugSeverity::High)
            }
            wgpu::Error::Internal { .. } => (
                DebugSource::ThirdParty,
                DebugType::UndefinedBehavior,
                DebugSeverity::Medium,
            ),
            #[allow(unreachable_patterns)]
            _ => (DebugSource::Other, DebugType::Other, DebugSeverity::Medium),
        };

        Self {
            source,
            kind,
            severity,
            id,
            text: err.to_string(),
        }
    }

    pub fn log(&self) {
        log::log!(target: "prism::gpu", self.severity.log_level(), "{self}");
    }
}

impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPU DEBUG NOTIFICATION\nSOURCE: {} TYPE: {}, SEVERITY: {}, ID: {}\n{}",
            self.source, self.kind, self.severity, self.id, self.text
        )
    }
}

/// Picks source and type for a validation error from its description.
pub(crate) fn classify_validation(description: &str) -> (DebugSource, DebugType) {
    let d = description.to_ascii_lowercase();

    let source = if d.contains("shader") || d.contains("wgsl") || d.contains("naga") {
        DebugSource::ShaderCompiler
    } else if d.contains("surface") || d.contains("swapchain") || d.contains("present") {
        DebugSource::WindowSystem
    } else {
        DebugSource::Api
    };

    let kind = if d.contains("deprecated") {
        DebugType::DeprecatedBehavior
    } else if d.contains("not supported") || d.contains("downlevel") {
        DebugType::Portability
    } else {
        DebugType::Error
    };

    (source, kind)
}

/// Numbers and logs decoded error reports.
#[derive(Debug, Default)]
pub struct DebugLogger {
    next_id: AtomicU32,
}

impl DebugLogger {
    pub fn report(&self, err: &wgpu::Error) -> DebugMessage {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let msg = DebugMessage::from_error(err, id);
        msg.log();
        msg
    }
}

/// Routes uncaptured device errors to a [`DebugLogger`] instead of panicking.
pub(crate) fn install_error_logger(device: &wgpu::Device) {
    let logger = Arc::new(DebugLogger::default());
    device.on_uncaptured_error(Arc::new(move |err: wgpu::Error| {
        logger.report(&err);
    }));
}
