//! CSV report export: a jobs overview and per-job payment histories.

use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::export::{format_amount, status_label};
use crate::model::Job;

/// Writes the jobs overview: one row per job with the derived
/// financial columns.
pub fn write_jobs_summary<W: Write>(jobs: &[Job], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "client",
        "contractor_type",
        "description",
        "status",
        "progress",
        "estimated_cost",
        "actual_cost",
        "total_paid",
        "remaining_balance",
        "start_date",
        "completion_date",
    ])?;

    for job in jobs {
        writer.write_record([
            job.client_name.clone(),
            job.contractor_type.to_string(),
            job.description.clone(),
            status_label(job.is_completed).to_string(),
            format!("{:.0}%", job.progress * 100.0),
            format_amount(job.estimated_cost),
            job.actual_cost.map(format_amount).unwrap_or_default(),
            format_amount(job.total_paid()),
            format_amount(job.remaining_balance()),
            job.start_date.format("%Y-%m-%d").to_string(),
            job.completion_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the jobs overview to a file.
pub fn jobs_summary_to_path(jobs: &[Job], path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_jobs_summary(jobs, file)
}

/// Writes one job's payment history: one row per recorded payment.
pub fn write_payment_history<W: Write>(job: &Job, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(["date", "amount", "method", "note"])?;
    for payment in &job.payments {
        writer.write_record([
            payment.date.format("%Y-%m-%d").to_string(),
            format_amount(payment.amount),
            payment.method.to_string(),
            payment.note.clone(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes one job's payment history to a file.
pub fn payment_history_to_path(job: &Job, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_payment_history(job, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContractorType, Payment, PaymentMethod};

    fn sample_job() -> Job {
        let mut job = Job::new("Maria Santos", ContractorType::Roofer, 14000.0);
        job.description = "Shingle replacement".to_string();
        job.progress = 0.4;
        job.with_payment(Payment::new(4000.0, PaymentMethod::Check, "Deposit"))
    }

    fn render<F: FnOnce(&mut Vec<u8>)>(write: F) -> String {
        let mut buf = Vec::new();
        write(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_jobs_summary_has_one_row_per_job() {
        let jobs = vec![sample_job(), sample_job()];
        let output = render(|buf| write_jobs_summary(&jobs, buf).unwrap());

        let lines: Vec<&str> = output.trim_end().lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].starts_with("client,contractor_type"));
        assert!(lines[1].contains("Maria Santos"));
        assert!(lines[1].contains("Roofer"));
        assert!(lines[1].contains("10000.00")); // remaining balance
        assert!(lines[1].contains("40%"));
    }

    #[test]
    fn test_jobs_summary_quotes_embedded_commas() {
        let mut job = sample_job();
        job.description = "Tear-off, underlayment, shingles".to_string();
        let output = render(|buf| write_jobs_summary(&[job], buf).unwrap());

        assert!(output.contains("\"Tear-off, underlayment, shingles\""));
    }

    #[test]
    fn test_payment_history_rows() {
        let job = sample_job().with_payment(Payment::new(2500.0, PaymentMethod::Zelle, "Progress"));
        let output = render(|buf| write_payment_history(&job, buf).unwrap());

        let lines: Vec<&str> = output.trim_end().lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("4000.00"));
        assert!(lines[1].contains("Check"));
        assert!(lines[2].contains("2500.00"));
        assert!(lines[2].contains("Zelle"));
    }

    #[test]
    fn test_summary_to_path_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        jobs_summary_to_path(&[sample_job()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Maria Santos"));
    }
}
