//! Report synthesis service.
//!
//! Turns project state plus the freshest report settings into a single
//! generation request, and normalizes every outcome into a displayable
//! value. The failure policy is graceful textual degradation: the service
//! returns plain values by construction, so no backend error can reach the
//! presentation layer as an error.

use tracing::{debug, warn};

use crate::domain::models::{DailyLog, Project};
use crate::domain::report::settings::{ReportSettings, SettingsStore};
use crate::domain::report::traits::TextGenerator;

/// Shown when the service answered but sent no text back.
const NO_SUMMARY_FALLBACK: &str = "Không có tóm tắt.";
/// Shown when the request itself failed.
const ANALYSIS_FAILED_FALLBACK: &str = "Lỗi phân tích từ AI. Vui lòng thử lại sau.";

/// Degraded checklist suggestions when the backend is unreachable. Fixed,
/// never derived from the facility type.
const CHECKLIST_FALLBACK: [&str; 3] = [
    "Verify system design approval",
    "Inspect pump room layout",
    "Test emergency lighting",
];

/// AI report synthesis over a [`TextGenerator`] backend.
///
/// Settings are resolved from the store immediately before each request,
/// never cached, so a save that lands while a request is pending applies to
/// the next request. Concurrent calls are independent: no coalescing, no
/// cancellation.
pub struct ReportService<G, S> {
    generator: G,
    settings: S,
}

impl<G, S> ReportService<G, S>
where
    G: TextGenerator,
    S: SettingsStore,
{
    pub fn new(generator: G, settings: S) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Narrative progress summary for one project and its recent logs.
    ///
    /// Always returns displayable text: the model's answer verbatim, a fixed
    /// "no summary" value when the response carried no text, or a fixed
    /// "analysis failed" value when the request failed. Failures are logged
    /// and absorbed here.
    pub async fn summarize_progress(&self, project: &Project, logs: &[&DailyLog]) -> String {
        let settings = ReportSettings::resolve(&self.settings);
        let prompt = build_progress_prompt(project, logs, &settings);
        debug!(project = %project.name, "dispatching progress summary request");

        match self.generator.generate(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => NO_SUMMARY_FALLBACK.to_string(),
            Err(err) => {
                warn!(%err, project = %project.name, "progress summary generation failed");
                ANALYSIS_FAILED_FALLBACK.to_string()
            }
        }
    }

    /// Five suggested TCVN compliance checklist items for a facility type.
    ///
    /// Success splits the answer into non-empty lines; a failed request
    /// degrades to a fixed three-item list.
    pub async fn suggest_checklist_items(&self, facility_type: &str) -> Vec<String> {
        let prompt = build_checklist_prompt(facility_type);

        match self.generator.generate(&prompt).await {
            Ok(text) => text
                .map(|t| {
                    t.lines()
                        // Blankness decides inclusion; kept lines stay verbatim.
                        .filter(|line| !line.trim().is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            Err(err) => {
                warn!(%err, facility_type, "checklist suggestion generation failed");
                CHECKLIST_FALLBACK.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

fn build_progress_prompt(project: &Project, logs: &[&DailyLog], settings: &ReportSettings) -> String {
    let project_json =
        serde_json::to_string(project).unwrap_or_else(|_| String::from("{}"));
    let logs_json = serde_json::to_string(logs).unwrap_or_else(|_| String::from("[]"));

    let mut focus_block = String::new();
    for line in settings.focus_instructions() {
        focus_block.push_str(line);
        focus_block.push('\n');
    }

    format!(
        "Phân tích tiến độ cho dự án thi công PCCC: \"{name}\".\n\
         Thông tin dự án: {project_json}\n\
         Nhật ký gần đây: {logs_json}\n\
         \n\
         Yêu cầu báo cáo:\n\
         1. Tổng quan tình trạng hiện tại.\n\
         {focus_block}\
         3. Các bước đề xuất tiếp theo cho Quản lý dự án.\n\
         \n\
         Phong cách trình bày: {tone}.\n\
         Ngôn ngữ: {language}.\n\
         Hãy trình bày dưới dạng Markdown với các tiêu đề rõ ràng.",
        name = project.name,
        tone = settings.report_tone.style_phrase(),
        language = settings.language.display_name(),
    )
}

fn build_checklist_prompt(facility_type: &str) -> String {
    format!(
        "Generate 5 critical PCCC compliance checklist items for a \"{facility_type}\" project based on TCVN standards.\n\
         Return the result as a simple list of tasks."
    )
}
