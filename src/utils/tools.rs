use log::info;

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    let gl_version = option_env!("GL").unwrap_or("Unknown");
    let glfw_version = option_env!("GLFW").unwrap_or("Unknown");
    let cpal_version = option_env!("CPAL").unwrap_or("Unknown");

    info!("Rust core dependancies");
    info!("  GL   version: {}", gl_version);
    info!("  GLFW version: {}", glfw_version);
    info!("  CPAL version: {}", cpal_version);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rust_core_dependencies_no_panic() {
        // The banner must never fail, whatever build.rs managed to inject.
        show_rust_core_dependencies();
    }
}
