pub mod converter_prefs;

pub use converter_prefs::ConverterPrefs;
