//! Aggregate descriptor rendering.

use gwtgen_api::GenerationConfig;
use quick_xml::escape::escape;
use std::fmt::Write;

/// Name the generated module is published under.
pub const RENAME_TO: &str = "_app";

/// Logging handlers toggled together by the logging flag.
pub const LOGGING_HANDLERS: [&str; 3] = [
    "gwt.logging.simpleRemoteHandler",
    "gwt.logging.developmentModeHandler",
    "gwt.logging.consoleHandler",
];

/// Renders the aggregate module descriptor.
///
/// Modules are emitted in the config's set order (lexicographic), so equal
/// configs always render identical bytes.
pub fn render_descriptor(config: &GenerationConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_descriptor(&mut out, config);
    out
}

fn write_descriptor(out: &mut String, config: &GenerationConfig) -> std::fmt::Result {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<module rename-to='{}'>", RENAME_TO)?;
    for module in config.modules() {
        writeln!(out, "    <inherits name=\"{}\"/>", escape(module.module_id().as_str()))?;
    }
    writeln!(out, "    <stylesheet src=\"{}\"/>", escape(config.stylesheet()))?;
    writeln!(out, "    <entry-point class='{}'/>", escape(config.entry_point()))?;

    let value = if config.logging_enabled() {
        "ENABLED"
    } else {
        "DISABLED"
    };
    for handler in LOGGING_HANDLERS {
        writeln!(out, "    <set-property name=\"{}\" value=\"{}\"/>", handler, value)?;
    }
    writeln!(out, "</module>")
}
