//! Compiled-in page content. Nothing here changes for the lifetime of the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static str,
    /// Gradient class pair consumed only by the stylesheet.
    pub color: &'static str,
    pub image: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub employer: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub photo_url: &'static str,
    pub freelance_heading: &'static str,
    pub freelance_body: &'static str,
    pub contact_heading: &'static str,
    pub contact_body: &'static str,
    pub footer: &'static str,
}

pub const PROFILE: Profile = Profile {
    initials: "BSP",
    name: "Bhuvana Sai Puchakayala",
    role: "Data Scientist Intern",
    employer: "TechnoColabs",
    tagline: "Building intelligent systems that transform raw data into actionable insights. End-to-end ML projects across multiple domains.",
    availability: "Available for Freelancing",
    photo_url: "https://media.licdn.com/dms/image/v2/D5603AQE1EShSsNxusQ/profile-displayphoto-crop_800_800/B56Zn77AsKIYAI-/0/1760868175321?e=1762387200&v=beta&t=jpfMxesu5_GXH4azYVNH_urfzyT8u26zDCV0JEAOAwE",
    freelance_heading: "Open for Freelance Projects",
    freelance_body: "I'm actively accepting freelance work in Data Science, Machine Learning, and Analytics. Let's build something amazing together!",
    contact_heading: "Let's Collaborate",
    contact_body: "Ready to discuss your next data science project or need insights from your data?",
    footer: "© 2025 Bhuvana Sai Puchakayala - Data Science Portfolio. Built with passion for data.",
};

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Titanic Survival Prediction",
        description: "Built a classification model predicting passenger survival with 82% accuracy using logistic regression and random forests.",
        tags: &["Python", "Scikit-learn", "EDA", "Classification"],
        metrics: "82% Accuracy",
        color: "from-blue-500 to-cyan-500",
        image: "📊",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=500&fit=crop",
    },
    Project {
        title: "House Price Forecasting",
        description: "Developed a regression model predicting house prices with RMSE of $25K using advanced feature engineering and gradient boosting.",
        tags: &["XGBoost", "Regression", "Feature Engineering"],
        metrics: "$25K RMSE",
        color: "from-purple-500 to-pink-500",
        image: "🏠",
        image_url: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=500&h=500&fit=crop",
    },
    Project {
        title: "Sentiment Analysis NLP",
        description: "Created an NLP pipeline analyzing 50K+ tweets with 88% sentiment classification accuracy using word embeddings and transformers.",
        tags: &["NLP", "BERT", "Text Mining", "Deep Learning"],
        metrics: "88% Accuracy",
        color: "from-orange-500 to-red-500",
        image: "💬",
        image_url: "https://images.unsplash.com/photo-1516321318423-f06f70d504d0?w=500&h=500&fit=crop",
    },
    Project {
        title: "Customer Clustering",
        description: "Segmented 10K customers into 5 distinct clusters using K-means, enabling targeted marketing strategies.",
        tags: &["Clustering", "Unsupervised Learning", "Business Analytics"],
        metrics: "5 Segments",
        color: "from-green-500 to-emerald-500",
        image: "👥",
        image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=500&h=500&fit=crop",
    },
];

pub const SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        category: "Languages",
        items: &["Python", "SQL", "R", "JavaScript"],
    },
    SkillCategory {
        category: "ML/DL",
        items: &["Scikit-learn", "TensorFlow", "PyTorch", "XGBoost"],
    },
    SkillCategory {
        category: "Data Tools",
        items: &["Pandas", "NumPy", "Matplotlib", "Seaborn"],
    },
    SkillCategory {
        category: "NLP & CV",
        items: &["NLTK", "Transformers", "OpenCV", "BERT"],
    },
];

pub fn project_count() -> usize {
    PROJECTS.len()
}

pub fn total_projects_label() -> String {
    format!("{}+", project_count())
}
