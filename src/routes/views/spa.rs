use std::path::{Path, PathBuf};

use askama::Template;
use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
};
use tower_http::services::ServeDir;

use crate::config::{WebConfig, defaults::DEFAULT_PUBLIC_DIR_NAME};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    project_name: String,
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate {
    project_name: String,
}

type HtmlError = (StatusCode, Html<String>);

/// Static assets under `/static`, the SPA shell for every other GET, and the
/// 404 page for missing assets and non-GET requests.
pub fn router(web: &WebConfig) -> Router {
    let public_dir = resolve_public_dir(web);
    tracing::debug!(public_dir = %public_dir.display(), "serving static assets");

    let assets = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    Router::new()
        .nest_service("/static", assets)
        .route("/", any(shell_or_not_found))
        .route("/{*path}", any(shell_or_not_found))
}

pub fn resolve_public_dir(web: &WebConfig) -> PathBuf {
    if let Some(path) = web.public_dir.as_ref() {
        return path.clone();
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join(DEFAULT_PUBLIC_DIR_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join(DEFAULT_PUBLIC_DIR_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_PUBLIC_DIR_NAME)
}

async fn shell_or_not_found(method: Method) -> Response {
    if method == Method::GET || method == Method::HEAD {
        index().await.into_response()
    } else {
        not_found().await.into_response()
    }
}

async fn index() -> Result<Html<String>, HtmlError> {
    let rendered = IndexTemplate {
        project_name: project_name(),
    }
    .render()
    .map_err(|_| html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render index"))?;
    Ok(Html(rendered))
}

async fn not_found() -> Result<HtmlError, HtmlError> {
    let rendered = NotFoundTemplate {
        project_name: project_name(),
    }
    .render()
    .map_err(|_| {
        html_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to render not found page",
        )
    })?;
    Ok((StatusCode::NOT_FOUND, Html(rendered)))
}

/// Crate name as a title, e.g. `kanban_server` -> `Kanban Server`.
pub fn project_name() -> String {
    let name = env!("CARGO_PKG_NAME")
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        "Project".to_string()
    } else {
        name
    }
}

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{project_name, resolve_public_dir};
    use crate::config::WebConfig;

    #[test]
    fn project_name_is_title_cased() {
        assert_eq!(project_name(), "Kanban Server");
    }

    #[test]
    fn configured_public_dir_wins() {
        let web = WebConfig {
            public_dir: Some(PathBuf::from("/srv/kanban/assets")),
        };
        assert_eq!(
            resolve_public_dir(&web),
            PathBuf::from("/srv/kanban/assets")
        );
    }
}
