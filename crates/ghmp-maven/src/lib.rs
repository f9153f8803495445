//! Maven integration: launcher resolution and the project descriptor.

pub mod descriptor;
mod environment;

pub use descriptor::{DEFAULT_DESCRIPTOR, ProjectDescriptor, descriptor_path, parse_artifact_id};
pub use environment::{MAVEN_DEBUG_EXECUTABLE, MAVEN_EXECUTABLE, MavenEnvironment, ToolExecutable};
