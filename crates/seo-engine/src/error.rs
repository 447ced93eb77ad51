/// Error types raised while turning raw document text into analyzable input.
///
/// Rule evaluation itself never fails: missing fields, keywords, headings and
/// paragraphs are reported as findings. Only a frontmatter block that cannot be
/// decoded aborts a run.

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("frontmatter is not valid yaml: {0}")]
    FrontmatterYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a key/value mapping, found {found}")]
    FrontmatterNotMapping { found: &'static str },
}
