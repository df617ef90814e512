use url::Url;

pub type RequestId = u64;

/// Company name used when the input cannot be read as a URL.
pub const FALLBACK_COMPANY: &str = "TechCorp Solutions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub succeeded: bool,
    pub company_name: String,
    pub email: String,
    pub draft_body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalyzerPhase {
    #[default]
    Idle,
    Busy {
        request_id: RequestId,
        submitted: String,
    },
}

impl AnalyzerPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalyzerPhase::Busy { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analyzer {
    input: String,
    phase: AnalyzerPhase,
    result: Option<AnalysisResult>,
    next_request: RequestId,
}

impl Analyzer {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &AnalyzerPhase {
        &self.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.input.trim().is_empty()
    }

    /// Returns false when the edit was rejected (input is locked while busy).
    pub(crate) fn set_input(&mut self, text: String) -> bool {
        if self.is_busy() || self.input == text {
            return false;
        }
        self.input = text;
        true
    }

    /// Starts a request when allowed; returns its id.
    pub(crate) fn submit(&mut self) -> Option<RequestId> {
        if !self.can_submit() {
            return None;
        }
        self.next_request += 1;
        let request_id = self.next_request;
        self.result = None;
        self.phase = AnalyzerPhase::Busy {
            request_id,
            submitted: self.input.clone(),
        };
        Some(request_id)
    }

    /// Completes the pending request if `request_id` is the one in flight.
    pub(crate) fn complete(&mut self, request_id: RequestId) -> Option<&AnalysisResult> {
        let submitted = match &self.phase {
            AnalyzerPhase::Busy {
                request_id: pending,
                submitted,
            } if *pending == request_id => submitted.clone(),
            _ => return None,
        };
        self.phase = AnalyzerPhase::Idle;
        self.result = Some(analyze(&submitted));
        self.result.as_ref()
    }

    /// Clears input and result. Returns the abandoned request, if any.
    pub(crate) fn reset(&mut self) -> Option<RequestId> {
        let abandoned = match self.phase {
            AnalyzerPhase::Busy { request_id, .. } => Some(request_id),
            AnalyzerPhase::Idle => None,
        };
        self.input.clear();
        self.result = None;
        self.phase = AnalyzerPhase::Idle;
        abandoned
    }
}

/// Builds the canned analysis for a submitted URL.
pub fn analyze(raw: &str) -> AnalysisResult {
    let company_name = company_name_from_url(raw).unwrap_or_else(|| FALLBACK_COMPANY.to_string());
    AnalysisResult {
        succeeded: true,
        email: format!("ceo@{}.com", company_name.to_lowercase()),
        draft_body: email_draft(&company_name),
        company_name,
    }
}

/// First host label, `www.` stripped, first letter upper-cased.
/// `None` when the input does not parse as a URL with a host.
pub fn company_name_from_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let candidate = if has_http_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = Url::parse(&candidate).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or(host);
    Some(capitalize_first(label))
}

fn has_http_prefix(text: &str) -> bool {
    text.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn email_draft(company: &str) -> String {
    format!(
        "Subject: Quick Question for {company}\n\
         \n\
         Hi there,\n\
         \n\
         I noticed {company} is making waves in the industry. \n\
         We've helped similar companies increase their sales pipeline by 340%.\n\
         \n\
         Would you be open to a 15-minute call this week to explore \n\
         how we could potentially help {company} achieve similar results?\n\
         \n\
         Best regards,\n\
         Your Sales Team"
    )
}
