//! Per-conversation engine façade.

use crate::domain::order::OrderRecord;
use crate::export::{export_records, ExportedOrder};
use crate::extract::{self, SkipReason};
use crate::render::SummaryRenderer;
use crate::store::OrderStore;

/// What one reply scan did to the tab: how many records were appended, and
/// why each remaining section was passed over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub appended: usize,
    pub skipped: Vec<SkipReason>,
}

impl ExtractionReport {
    pub fn sections_seen(&self) -> usize {
        self.appended + self.skipped.len()
    }
}

/// A reply split into the part meant for the user and the extraction outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedReply {
    pub visible: String,
    pub report: ExtractionReport,
}

/// One conversation's ordering state: the append-only tab plus the renderer
/// it is summarized through. Sessions are independent; nothing is shared.
pub struct OrderSession {
    store: OrderStore,
    renderer: SummaryRenderer,
}

impl OrderSession {
    pub fn new(renderer: SummaryRenderer) -> Self {
        Self { store: OrderStore::new(), renderer }
    }

    /// Scan a reply and append every well-formed order section.
    pub fn extract(&mut self, reply: &str) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        for outcome in extract::extract_orders(reply) {
            match outcome {
                Ok(record) => {
                    self.store.append(record);
                    report.appended += 1;
                }
                Err(reason) => report.skipped.push(reason),
            }
        }
        report
    }

    /// Like [`extract`](Self::extract), reporting only the appended count.
    pub fn extract_and_append(&mut self, reply: &str) -> usize {
        self.extract(reply).appended
    }

    /// The full reply treatment: strip the user-visible part and extract in
    /// one pass.
    pub fn process_reply(&mut self, reply: &str) -> ProcessedReply {
        let visible = extract::visible_reply(reply).to_string();
        let report = self.extract(reply);
        ProcessedReply { visible, report }
    }

    pub fn render_summary(&self) -> String {
        self.renderer.render(self.store.records())
    }

    pub fn orders(&self) -> &[OrderRecord] {
        self.store.records()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn export(&self) -> Vec<ExportedOrder> {
        export_records(self.store.records())
    }

    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.export()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn renderer(&self) -> &SummaryRenderer {
        &self.renderer
    }
}

impl Default for OrderSession {
    /// A session over the built-in ruleset; callers with a configured
    /// document should prefer [`OrderSession::new`].
    fn default() -> Self {
        Self::new(SummaryRenderer::fallback())
    }
}
