use std::error::Error;
use std::path::Path;

use crate::types::AnalyzerCfg;

/// Leser inn analysekonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_cfg(path: &str) -> Result<AnalyzerCfg, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: AnalyzerCfg = serde_json::from_str(&contents)?;
        log::info!(
            "konfig lastet fra {} (window={}d, band={})",
            path,
            cfg.trend_window_days(),
            cfg.stable_band()
        );
        Ok(cfg)
    } else {
        log::warn!("fant ikke konfig på {}, bruker defaults", path);
        Ok(AnalyzerCfg::default())
    }
}

/// Lagrer analysekonfig til disk som JSON (pretty-print).
pub fn save_cfg(cfg: &AnalyzerCfg, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    log::info!("konfig lagret til {}", path);
    Ok(())
}
