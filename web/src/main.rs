use api::prefs::ConverterPrefs;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let prefs = ConverterPrefs::default();
    dioxus_logger::init(prefs.log_level()).expect("failed to init logger");
    dioxus::launch(ui::App);
}
