use std::fmt;

use url::Url;

use crate::JobResult;

/// Third-party sites that aggregate job postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobBoard {
    LinkedIn,
    Indeed,
    Glassdoor,
}

impl JobBoard {
    pub const ALL: [JobBoard; 3] = [JobBoard::LinkedIn, JobBoard::Indeed, JobBoard::Glassdoor];

    pub fn domain(self) -> &'static str {
        match self {
            JobBoard::LinkedIn => "linkedin.com",
            JobBoard::Indeed => "indeed.com",
            JobBoard::Glassdoor => "glassdoor.com",
        }
    }

    /// Detects the job board behind `url` from its host name.
    ///
    /// Matches when the lowercased host contains a board's domain, so
    /// subdomains such as `uk.indeed.com` count. Anything that fails to parse
    /// or has no host is `None`.
    pub fn classify(url: &str) -> Option<JobBoard> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|board| host.contains(board.domain()))
    }
}

impl fmt::Display for JobBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobBoard::LinkedIn => "LinkedIn",
            JobBoard::Indeed => "Indeed",
            JobBoard::Glassdoor => "Glassdoor",
        };
        f.write_str(name)
    }
}

pub fn is_job_board(url: &str) -> bool {
    JobBoard::classify(url).is_some()
}

/// Number of `jobs` whose URL belongs to a known job board.
pub fn count_job_boards(jobs: &[JobResult]) -> usize {
    jobs.iter().filter(|job| job.is_job_board()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_boards() {
        assert_eq!(
            JobBoard::classify("https://www.linkedin.com/jobs/123"),
            Some(JobBoard::LinkedIn)
        );
        assert_eq!(
            JobBoard::classify("https://www.indeed.com/q-rust-jobs.html"),
            Some(JobBoard::Indeed)
        );
        assert_eq!(
            JobBoard::classify("https://www.glassdoor.com/Job/index.htm"),
            Some(JobBoard::Glassdoor)
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            JobBoard::classify("HTTPS://WWW.LINKEDIN.COM/jobs/view/1"),
            Some(JobBoard::LinkedIn)
        );
    }

    #[test]
    fn test_company_site_is_not_a_board() {
        assert!(!is_job_board("https://acme.com/careers/1"));
    }

    #[test]
    fn test_malformed_urls_never_match() {
        assert!(!is_job_board("not a url"));
        assert!(!is_job_board(""));
        assert!(!is_job_board("linkedin.com/jobs"));
        assert!(!is_job_board("mailto:jobs@linkedin.com"));
    }

    #[test]
    fn test_only_host_is_inspected() {
        assert!(!is_job_board("https://acme.com/from/linkedin.com"));
        assert!(!is_job_board("https://acme.com/?ref=indeed.com"));
    }

    #[test]
    fn test_count_job_boards() {
        let jobs = vec![
            JobResult::new("a", "https://www.linkedin.com/jobs/1"),
            JobResult::new("b", "https://acme.com/careers/2"),
            JobResult::new("c", "https://www.indeed.com/viewjob?jk=3"),
            JobResult::new("d", "not a url"),
        ];
        assert_eq!(count_job_boards(&jobs), 2);
        assert_eq!(count_job_boards(&[]), 0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(JobBoard::LinkedIn.to_string(), "LinkedIn");
        assert_eq!(JobBoard::Glassdoor.domain(), "glassdoor.com");
    }
}
