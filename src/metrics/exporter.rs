use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::SamplerMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for sampler metrics snapshots.
///
/// Writes the Prometheus text exposition format so it can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector. Write failures are
/// ignored; metrics never affect sampling.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<SamplerMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &SamplerMetricsSnapshot) {
        self.write_counter("calls_total", snapshot.calls);
        self.write_counter("draws_total", snapshot.draws);
        self.write_counter("rejections_total", snapshot.rejections);
        self.write_counter("fallbacks_total", snapshot.fallbacks);
        self.write_counter("evictions_total", snapshot.evictions);
        self.write_counter("clears_total", snapshot.clears);
        self.write_gauge("history_len", snapshot.history_len as u64);
        self.write_gauge("history_capacity", snapshot.history_capacity as u64);
        self.write_gauge("bound", snapshot.bound as u64);
    }
}
