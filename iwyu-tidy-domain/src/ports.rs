use iwyu_tidy_types::FileReport;

/// Receives every finalized report, exactly once, in stream order.
///
/// Reports with nothing to add or remove are delivered too so the receiver can
/// count them.
pub trait ReportSink {
    fn accept(&mut self, report: FileReport) -> anyhow::Result<()>;
}

impl ReportSink for Vec<FileReport> {
    fn accept(&mut self, report: FileReport) -> anyhow::Result<()> {
        self.push(report);
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn accept(&mut self, report: FileReport) -> anyhow::Result<()> {
        (**self).accept(report)
    }
}
