use std::sync::Once;

static LOG_INITIALIZED: Once = Once::new();

pub fn init() {
    LOG_INITIALIZED.call_once(|| {
        // Tests may have installed a logger already
        let _ = env_logger::Builder::from_env(
            env_logger::Env::new()
                .filter_or("POSTBUILD_LOG", "postbuild=info,spirv_compiler=info")
                .write_style("POSTBUILD_LOG_STYLE"),
        )
        .format_timestamp(None)
        .format_module_path(false)
        .try_init();
    });
}
