//! Version and build information.

use std::fmt;

/// Build information for one of the tm-tools binaries
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub program: &'static str,
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.version)?;

        if let Some(commit) = self.commit {
            write!(f, "\nCommit: {}", commit)?;
        }
        if let Some(date) = self.build_date {
            write!(f, "\nBuilt: {}", date)?;
        }
        write!(f, "\nTarget: {}", self.target)?;
        if let Some(rustc) = self.rustc_version {
            write!(f, "\nRustc: {}", rustc)?;
        }

        Ok(())
    }
}

/// Get build information for the named program
pub fn get_build_info(program: &'static str) -> BuildInfo {
    BuildInfo {
        program,
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("TM_TOOLS_GIT_HASH"),
        build_date: option_env!("TM_TOOLS_BUILD_DATE"),
        target: env!("TARGET"),
        rustc_version: option_env!("TM_TOOLS_RUSTC_VERSION"),
    }
}
