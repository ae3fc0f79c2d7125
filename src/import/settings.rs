#[derive(Clone, Debug)]
pub struct Settings {
    pub delimiter: char,
    pub template_option_slots: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            delimiter: ',',
            template_option_slots: 4,
        }
    }
}
