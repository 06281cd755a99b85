//! PDF report export via lopdf.
//!
//! Documents are assembled as plain Helvetica text on US Letter pages.
//! Two reports: a single-job statement (client, costs, payment history,
//! balance) and a jobs overview.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::config::Preferences;
use crate::error::ExportError;
use crate::export::{format_amount, status_label};
use crate::model::Job;

const MARGIN_LEFT: f64 = 54.0;
const TOP_START: f64 = 756.0;
const BOTTOM_LIMIT: f64 = 54.0;
const LINE_SPACING: f64 = 1.4;

/// Accumulates text lines for one page, tracking the write cursor.
struct PageBuilder {
    operations: Vec<Operation>,
    cursor: f64,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            cursor: TOP_START,
        }
    }

    fn is_full(&self) -> bool {
        self.cursor < BOTTOM_LIMIT
    }

    /// Writes one line at the cursor and advances it. Positions are
    /// emitted as whole points; sub-point placement buys nothing here.
    fn line(&mut self, indent: f64, size: f64, text: &str) {
        self.operations.push(Operation::new("BT", vec![]));
        self.operations
            .push(Operation::new("Tf", vec!["F1".into(), (size as i64).into()]));
        self.operations.push(Operation::new(
            "Td",
            vec![
                ((MARGIN_LEFT + indent) as i64).into(),
                (self.cursor as i64).into(),
            ],
        ));
        self.operations
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.operations.push(Operation::new("ET", vec![]));
        self.cursor -= size * LINE_SPACING;
    }

    fn gap(&mut self, amount: f64) {
        self.cursor -= amount;
    }
}

/// Renders a sequence of labeled lines across as many pages as needed.
struct ReportBuilder {
    completed: Vec<PageBuilder>,
    current: PageBuilder,
}

impl ReportBuilder {
    fn new() -> Self {
        Self {
            completed: Vec::new(),
            current: PageBuilder::new(),
        }
    }

    fn page(&mut self) -> &mut PageBuilder {
        if self.current.is_full() {
            let full = std::mem::replace(&mut self.current, PageBuilder::new());
            self.completed.push(full);
        }
        &mut self.current
    }

    fn line(&mut self, indent: f64, size: f64, text: &str) {
        self.page().line(indent, size, text);
    }

    fn gap(&mut self, amount: f64) {
        self.page().gap(amount);
    }

    fn header(&mut self, preferences: &Preferences, title: &str) {
        if !preferences.company_name.is_empty() {
            self.line(0.0, 16.0, &preferences.company_name);
        }
        if !preferences.company_phone.is_empty() {
            self.line(0.0, 10.0, &preferences.company_phone);
        }
        self.gap(8.0);
        self.line(0.0, 14.0, title);
        self.gap(10.0);
    }

    fn assemble(self) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut pages = self.completed;
        pages.push(self.current);

        let mut kids: Vec<Object> = Vec::new();
        let count = pages.len() as i64;
        for page in pages {
            let content = Content {
                operations: page.operations,
            };
            let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => stream_id,
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).map_err(lopdf::Error::from)?;
        Ok(buffer)
    }
}

/// Renders a single-job statement: client details, costs, payment
/// history and the outstanding balance.
pub fn job_statement(job: &Job, preferences: &Preferences) -> Result<Vec<u8>, ExportError> {
    let mut report = ReportBuilder::new();
    report.header(preferences, "Job Statement");

    report.line(0.0, 12.0, &job.client_name);
    if !job.client_phone.is_empty() {
        report.line(0.0, 10.0, &job.client_phone);
    }
    if !job.client_email.is_empty() {
        report.line(0.0, 10.0, &job.client_email);
    }
    if !job.address.is_empty() {
        report.line(0.0, 10.0, &job.address);
    }
    report.gap(8.0);

    report.line(0.0, 10.0, &format!("Trade: {}", job.contractor_type));
    if !job.description.is_empty() {
        report.line(0.0, 10.0, &job.description);
    }
    report.line(
        0.0,
        10.0,
        &format!(
            "Status: {} ({:.0}% complete)",
            status_label(job.is_completed),
            job.progress * 100.0
        ),
    );
    report.line(
        0.0,
        10.0,
        &format!("Started: {}", job.start_date.format("%Y-%m-%d")),
    );
    if let Some(done) = job.completion_date {
        report.line(0.0, 10.0, &format!("Completed: {}", done.format("%Y-%m-%d")));
    }
    report.gap(8.0);

    report.line(
        0.0,
        10.0,
        &format!("Estimated cost: {}", format_amount(job.estimated_cost)),
    );
    if let Some(actual) = job.actual_cost {
        report.line(0.0, 10.0, &format!("Actual cost: {}", format_amount(actual)));
    }
    report.gap(8.0);

    report.line(0.0, 12.0, "Payments");
    if job.payments.is_empty() {
        report.line(12.0, 10.0, "No payments recorded.");
    }
    for payment in &job.payments {
        let mut entry = format!(
            "{}  {}  {}",
            payment.date.format("%Y-%m-%d"),
            format_amount(payment.amount),
            payment.method
        );
        if !payment.note.is_empty() {
            entry.push_str(&format!("  ({})", payment.note));
        }
        report.line(12.0, 10.0, &entry);
    }
    report.gap(8.0);

    report.line(
        0.0,
        11.0,
        &format!("Total paid: {}", format_amount(job.total_paid())),
    );
    report.line(
        0.0,
        11.0,
        &format!("Balance due: {}", format_amount(job.remaining_balance())),
    );
    if job.is_fully_paid() {
        report.line(0.0, 11.0, "Paid in full. Thank you!");
    }

    report.assemble()
}

/// Renders the jobs overview: aggregate totals followed by one line
/// per job.
pub fn jobs_report(jobs: &[Job], preferences: &Preferences) -> Result<Vec<u8>, ExportError> {
    let mut report = ReportBuilder::new();
    report.header(preferences, "Jobs Overview");

    let active: Vec<&Job> = jobs.iter().filter(|j| !j.is_completed).collect();
    let completed: Vec<&Job> = jobs.iter().filter(|j| j.is_completed).collect();
    let collected: f64 = jobs.iter().map(|j| j.total_paid()).sum();
    let outstanding: f64 = jobs.iter().map(|j| j.remaining_balance()).sum();

    report.line(
        0.0,
        10.0,
        &format!(
            "{} active ({} estimated), {} completed",
            active.len(),
            format_amount(active.iter().map(|j| j.estimated_cost).sum()),
            completed.len()
        ),
    );
    report.line(
        0.0,
        10.0,
        &format!(
            "Collected: {}   Outstanding: {}",
            format_amount(collected),
            format_amount(outstanding)
        ),
    );
    report.gap(10.0);

    for job in jobs {
        report.line(
            0.0,
            10.0,
            &format!(
                "{} - {} - {} - paid {} of {}",
                job.client_name,
                job.contractor_type,
                status_label(job.is_completed),
                format_amount(job.total_paid()),
                format_amount(job.effective_cost())
            ),
        );
    }

    report.assemble()
}

/// Writes rendered report bytes to a file.
pub fn save_to_path(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
