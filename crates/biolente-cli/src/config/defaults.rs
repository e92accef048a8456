pub struct DefaultsConfig {
    pub palette: String,
    pub monochromatic_base: String,
    pub font_size: u16,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            palette: "cpk".to_string(),
            monochromatic_base: "#0072B2".to_string(),
            font_size: 100,
        }
    }
}
