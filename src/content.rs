use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::media::Media;

pub const SITE_FILE: &str = "site.json";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| load_content(SITE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expertise {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub categories: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub credential: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
    pub description: String,
    /// Tailwind gradient stops for the hover glow, e.g. `from-sky-500/20 to-blue-500/20`.
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub sketch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
    pub kind: String,
    #[serde(default)]
    pub image: Option<OgImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconLink {
    pub rel: String,
    pub href: String,
    #[serde(default)]
    pub mime: Option<String>,
}

/// Document metadata: `<head>` tags, OpenGraph card and icons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Origin relative urls are resolved against, e.g. `https://example.com`.
    pub base_url: String,
    pub title: String,
    pub description: String,
    pub generator: Option<String>,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub open_graph: Option<OpenGraph>,
    pub icons: Vec<IconLink>,
}

impl SiteMeta {
    /// Resolves `path` against `base_url`. Absolute urls pass through, as does
    /// everything when no base is configured.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || self.base_url.is_empty()
        {
            return path.to_string();
        }
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Everything the page shows, read from `content/site.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub meta: SiteMeta,
    pub profile: Profile,
    pub philosophy: String,
    pub career_highlight: String,
    pub expertise: Vec<Expertise>,
    #[serde(default)]
    pub industries: Vec<Industry>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
}

/// Parsed site content, loaded once per process.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

pub fn parse_content(file: &str, data: &[u8]) -> Result<SiteContent, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn load_content(file: &str) -> Result<SiteContent, ContentError> {
    let asset = ContentAssets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    let content = parse_content(file, &asset.data)?;
    log::debug!(
        "loaded {file}: {} projects, {} experiences",
        content.projects.len(),
        content.experiences.len()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::VideoHost;

    #[test]
    fn test_embedded_content_parses() {
        let content = site_content().expect("embedded content should parse");
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.experiences.is_empty());
        assert!(content
            .projects
            .iter()
            .flat_map(|p| p.media.iter())
            .all(|m| !m.src().is_empty()));
    }

    #[test]
    fn test_embedded_content_is_complete() {
        let content = site_content().unwrap();
        assert_eq!(content.projects.len(), 11);
        assert_eq!(content.expertise.len(), 10);
        assert_eq!(content.industries.len(), 11);
        let taostats = content
            .projects
            .iter()
            .find(|p| p.name == "Taostats")
            .expect("Taostats project");
        assert_eq!(taostats.media.len(), 9);
        assert!(content.projects.iter().all(|p| !p.media.is_empty()));
        assert!(content
            .industries
            .iter()
            .all(|i| !i.name.is_empty() && !i.description.is_empty()));
    }

    #[test]
    fn test_embedded_meta() {
        let meta = &site_content().unwrap().meta;
        assert_eq!(meta.base_url, "https://jonas-garcia.vercel.app");
        assert!(!meta.keywords.is_empty());
        assert!(!meta.authors.is_empty());
        let og = meta.open_graph.as_ref().expect("open graph block");
        assert_eq!(og.locale, "en_US");
        assert_eq!(og.kind, "website");
        let image = og.image.as_ref().expect("open graph image");
        assert_eq!(
            meta.absolute_url(&image.url),
            "https://jonas-garcia.vercel.app/images/jonas.jpg"
        );
        assert!(meta
            .icons
            .iter()
            .any(|i| i.rel == "icon" && i.href == "/favicon.ico"));
    }

    #[test]
    fn test_absolute_url() {
        let meta = SiteMeta {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(meta.absolute_url("/a.png"), "https://example.com/a.png");
        assert_eq!(meta.absolute_url("./a.png"), "https://example.com/a.png");
        assert_eq!(meta.absolute_url("a.png"), "https://example.com/a.png");
        assert_eq!(
            meta.absolute_url("https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
        assert_eq!(SiteMeta::default().absolute_url("/a.png"), "/a.png");
    }

    #[test]
    fn test_embedded_content_covers_every_host() {
        let content = site_content().unwrap();
        let hosts = content
            .projects
            .iter()
            .flat_map(|p| p.media.iter())
            .filter_map(|m| match m {
                Media::Video { src, .. } => Some(VideoHost::classify(src)),
                Media::Image { .. } => None,
            })
            .collect::<Vec<_>>();
        assert!(hosts.contains(&VideoHost::Vimeo));
        assert!(hosts.contains(&VideoHost::Loom));
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            load_content("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn test_malformed_content() {
        let err = parse_content("bad.json", b"{ \"profile\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == "bad.json"));
        assert!(err.to_string().starts_with("Couldn't parse bad.json"));

        let bad_kind = br#"{"profile": {}, "projects": [{"media": [{"kind": "gif"}]}]}"#;
        assert!(parse_content("bad.json", bad_kind).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = br#"{
            "profile": {
                "name": "N", "role": "R", "email": "e@x.com", "phone": "1",
                "location": "L", "linkedin": "li", "github": "gh",
                "summary": "S", "initials": "N"
            },
            "philosophy": "P",
            "career_highlight": "C",
            "expertise": [],
            "experiences": [{
                "company": "Co", "title": "T", "start": "2020", "end": "2021",
                "bullets": [], "stack": []
            }],
            "projects": [{
                "name": "P", "categories": "C", "description": "D",
                "highlights": [], "stack": []
            }],
            "skills": [],
            "education": [],
            "testimonials": []
        }"#;
        let content = parse_content("min.json", json).unwrap();
        assert_eq!(content.profile.avatar, None);
        assert_eq!(content.experiences[0].location, None);
        assert!(content.projects[0].media.is_empty());
        assert_eq!(content.projects[0].link, None);
        assert!(content.industries.is_empty());
        assert!(content.meta.keywords.is_empty());
        assert!(content.meta.open_graph.is_none());
    }
}
