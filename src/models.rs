// src/models.rs

// Password generation options
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 10,
            include_uppercase: true,
            include_special: false,
        }
    }
}
