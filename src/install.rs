//! Deployment of rendered pages to the web host over scp/ssh.

use crate::converter::OUTPUT_MODE;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_HOST: &str = "shell.sourceforge.net";
pub const DEFAULT_REMOTE_DIR: &str = "/home/groups/python/htdocs/peps";

/// Remote location that receives the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub host: String,
    pub dir: String,
    /// Login name; the local user is used when unset.
    pub username: Option<String>,
}

impl Default for InstallTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            dir: DEFAULT_REMOTE_DIR.to_string(),
            username: None,
        }
    }
}

impl InstallTarget {
    /// `user@host`, or just `host`.
    pub fn remote(&self) -> String {
        match &self.username {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }

    /// `scp <pages...> <stylesheet> remote:dir`
    pub fn upload_command(&self, pages: &[PathBuf], stylesheet: &Path) -> Command {
        let mut command = Command::new("scp");
        command
            .args(pages)
            .arg(stylesheet)
            .arg(format!("{}:{}", self.remote(), self.dir));
        command
    }

    /// `ssh remote chmod 664 dir/*`
    pub fn chmod_command(&self) -> Command {
        let mut command = Command::new("ssh");
        command
            .arg(self.remote())
            .arg("chmod")
            .arg(format!("{:o}", OUTPUT_MODE))
            .arg(format!("{}/*", self.dir));
        command
    }

    /// Uploads the pages and stylesheet, then fixes remote permissions.
    pub fn install(&self, pages: &[PathBuf], stylesheet: &Path) -> Result<()> {
        log::info!("installing {} pages to {}", pages.len(), self.remote());
        run(self.upload_command(pages, stylesheet))?;
        run(self.chmod_command())
    }
}

fn run(mut command: Command) -> Result<()> {
    log::debug!("running {:?}", command);
    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Install(format!("{:?} exited with {}", command, status)))
    }
}
