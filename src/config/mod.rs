mod model;
mod persistence;

pub use model::{FontConfig, PaletteConfig, ThemesConfig};
pub use persistence::{
    config_base_dir, config_path, load_config, load_config_from, save_config, save_config_to,
};
