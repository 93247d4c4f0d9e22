/// Profession category attached to every profile.
///
/// Input records carry the key (`Blockchain Developer`); responses show the
/// display label (`Blockchain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AiEngineer,
    BlockchainDeveloper,
    DataScientist,
    Entrepreneur,
    SoftwareEngineer,
    WebDeveloper,
    Other,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 7] = [
        Category::AiEngineer,
        Category::BlockchainDeveloper,
        Category::DataScientist,
        Category::Entrepreneur,
        Category::SoftwareEngineer,
        Category::WebDeveloper,
        Category::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::AiEngineer => "AI Engineer",
            Category::BlockchainDeveloper => "Blockchain Developer",
            Category::DataScientist => "Data Scientist",
            Category::Entrepreneur => "Entrepreneur",
            Category::SoftwareEngineer => "Software Engineer",
            Category::WebDeveloper => "Web Developer",
            Category::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::AiEngineer => "AI Engineer",
            Category::BlockchainDeveloper => "Blockchain",
            Category::DataScientist => "Data Science",
            Category::Entrepreneur => "Entrepreneur",
            Category::SoftwareEngineer => "Software Engineer",
            Category::WebDeveloper => "Web Development",
            Category::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.key()).collect()
    }

    /// Categories ordered alphabetically by display label
    pub fn by_label() -> Vec<Category> {
        let mut all = Self::ALL.to_vec();
        all.sort_by_key(|c| c.label());
        all
    }
}
