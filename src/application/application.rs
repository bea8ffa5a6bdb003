use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::tree::{RenderError, TreeBuildError, TreeBuilder, render};

pub struct Application;

impl Application {
    pub fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        debug!("Scanning directory: {}", config.root.display());

        let tree = TreeBuilder::new(config.ignore)
            .build(&config.root)
            .context(ScanSnafu)?;

        let diagram = render(&tree).context(RenderingSnafu)?;
        println!("{diagram}");

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading the directory tree"))]
    ScanError { source: TreeBuildError },
    #[snafu(display("Critical failure encountered while rendering the directory tree"))]
    RenderingError { source: RenderError },
}
