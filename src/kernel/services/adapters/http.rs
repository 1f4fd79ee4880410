//! `RemoteStore` over the project server's HTTP endpoints.

use std::time::Duration;

use crate::kernel::services::ports::{ProjectListing, RemoteError, RemoteResult, RemoteStore};
use crate::models::{FileId, ProjectId};

/// Body the server sends back for an accepted write.
const WRITE_ACK: &str = "OK";

pub struct HttpRemoteStore {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("ecweb/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn map_error(what: &str, err: ureq::Error) -> RemoteError {
    match err {
        ureq::Error::Status(404, _) => RemoteError::NotFound(what.to_string()),
        ureq::Error::Status(code, _) => {
            RemoteError::Transport(format!("{} answered HTTP {}", what, code))
        }
        ureq::Error::Transport(t) => RemoteError::Transport(t.to_string()),
    }
}

fn read_body(response: ureq::Response) -> RemoteResult<String> {
    response
        .into_string()
        .map_err(|e| RemoteError::Transport(format!("failed to read response body: {}", e)))
}

impl RemoteStore for HttpRemoteStore {
    fn list_projects(&self) -> RemoteResult<Vec<ProjectListing>> {
        let url = self.url("projects");
        tracing::debug!(url = %url, "GET projects");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| map_error("projects", e))?;
        let body = read_body(response)?;
        serde_json::from_str(&body)
            .map_err(|e| RemoteError::Transport(format!("invalid project listing: {}", e)))
    }

    fn read_file(&self, file: FileId) -> RemoteResult<String> {
        let url = self.url(&format!("files/{}", file));
        tracing::debug!(url = %url, "GET file");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| map_error(&format!("file {}", file), e))?;
        read_body(response)
    }

    fn write_file(&self, file: FileId, contents: &str) -> RemoteResult<()> {
        let url = self.url(&format!("files/{}", file));
        tracing::debug!(url = %url, len = contents.len(), "POST file");
        let response = match self.agent.post(&url).send_form(&[("contents", contents)]) {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => {
                return Err(RemoteError::NotFound(format!("file {}", file)))
            }
            Err(ureq::Error::Status(code, _)) => {
                return Err(RemoteError::Persist(format!("server answered HTTP {}", code)))
            }
            Err(ureq::Error::Transport(t)) => return Err(RemoteError::Transport(t.to_string())),
        };

        let body = read_body(response)?;
        if body.trim() == WRITE_ACK {
            Ok(())
        } else {
            Err(RemoteError::Persist(format!(
                "server did not acknowledge the write: {:?}",
                body.trim()
            )))
        }
    }

    fn create_file(&self, project: ProjectId, name: &str) -> RemoteResult<()> {
        let url = self.url(&format!("projects/{}/files", project));
        tracing::debug!(url = %url, name, "POST new file");
        self.agent
            .post(&url)
            .send_form(&[("name", name)])
            .map_err(|e| map_error(&format!("project {}", project), e))?;
        Ok(())
    }

    fn delete_file(&self, file: FileId) -> RemoteResult<()> {
        let url = self.url(&format!("files/{}", file));
        tracing::debug!(url = %url, "DELETE file");
        self.agent
            .delete(&url)
            .call()
            .map_err(|e| map_error(&format!("file {}", file), e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/http.rs"]
mod tests;
