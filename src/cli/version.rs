//! # Version Command

/// Print package version and build information set by `build.rs`
pub fn version_command() {
    println!("strimzi-kafka {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Build info: timestamp={}, datetime={}, git_hash={}",
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );
}
