//! Fixed seed records used when the durable store holds no data.
//!
//! These mirror the demo content of the JDOM catalog: three accounts with
//! known credentials, three producer organizations, five themes, three
//! licenses and five datasets.

use chrono::Utc;

use crate::models::{
    Dataset, DatasetFormat, DatasetStatus, License, Organization, StoredUser, Theme, User, UserRole,
};

pub fn seed_users() -> Vec<StoredUser> {
    let now = Utc::now().to_rfc3339();
    vec![
        StoredUser {
            user: User {
                id: "1".to_string(),
                email: "admin@jdom.ml".to_string(),
                name: Some("Administrateur JDOM".to_string()),
                role: UserRole::Admin,
                organization_id: Some("1".to_string()),
                is_active: true,
                email_verified: Some(true),
                last_login_at: None,
                created_at: now.clone(),
                updated_at: now.clone(),
            },
            password: Some("Admin123!".to_string()),
        },
        StoredUser {
            user: User {
                id: "2".to_string(),
                email: "contributor@jdom.ml".to_string(),
                name: Some("Contributeur Test".to_string()),
                role: UserRole::Contributor,
                organization_id: Some("1".to_string()),
                is_active: true,
                email_verified: Some(true),
                last_login_at: None,
                created_at: now.clone(),
                updated_at: now.clone(),
            },
            password: Some("Contributor123!".to_string()),
        },
        StoredUser {
            user: User {
                id: "3".to_string(),
                email: "public@jdom.ml".to_string(),
                name: Some("Utilisateur Public".to_string()),
                role: UserRole::Public,
                organization_id: None,
                is_active: true,
                email_verified: Some(false),
                last_login_at: None,
                created_at: now.clone(),
                updated_at: now,
            },
            password: Some("Public123!".to_string()),
        },
    ]
}

pub fn seed_organizations() -> Vec<Organization> {
    let now = Utc::now().to_rfc3339();
    vec![
        Organization {
            id: "1".to_string(),
            name: "Ministère de l'Économie et des Finances".to_string(),
            description: Some(
                "Organisation gouvernementale responsable des données économiques".to_string(),
            ),
            email: Some("contact@finances.ml".to_string()),
            website: Some("https://finances.ml".to_string()),
            logo: None,
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        Organization {
            id: "2".to_string(),
            name: "Institut National de la Statistique".to_string(),
            description: Some(
                "Organisme chargé de la collecte et de l'analyse des statistiques".to_string(),
            ),
            email: Some("contact@instat.ml".to_string()),
            website: Some("https://instat.ml".to_string()),
            logo: None,
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        Organization {
            id: "3".to_string(),
            name: "Agence Nationale de l'Aviation Civile".to_string(),
            description: Some("Données sur le transport aérien".to_string()),
            email: Some("contact@anac.ml".to_string()),
            website: None,
            logo: None,
            created_at: now.clone(),
            updated_at: now,
        },
    ]
}

pub fn seed_themes() -> Vec<Theme> {
    let now = Utc::now().to_rfc3339();
    let theme = |id: &str, name: &str, slug: &str, description: &str, icon: &str| Theme {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
        created_at: now.clone(),
        updated_at: now.clone(),
    };
    vec![
        theme("1", "Économie", "economie", "Données économiques et financières", "💰"),
        theme("2", "Santé", "sante", "Données de santé publique", "🏥"),
        theme("3", "Éducation", "education", "Données sur l'éducation", "📚"),
        theme("4", "Transport", "transport", "Données sur les transports", "🚗"),
        theme("5", "Environnement", "environnement", "Données environnementales", "🌍"),
    ]
}

pub fn seed_licenses() -> Vec<License> {
    let now = Utc::now().to_rfc3339();
    vec![
        License {
            id: "1".to_string(),
            name: "Open Data Commons Open Database License (ODbL)".to_string(),
            slug: "odbl".to_string(),
            description: Some("Licence pour bases de données ouvertes".to_string()),
            url: Some("https://opendatacommons.org/licenses/odbl/".to_string()),
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        License {
            id: "2".to_string(),
            name: "Creative Commons Attribution 4.0".to_string(),
            slug: "cc-by-4".to_string(),
            description: Some("Attribution requise".to_string()),
            url: Some("https://creativecommons.org/licenses/by/4.0/".to_string()),
            created_at: now.clone(),
            updated_at: now.clone(),
        },
        License {
            id: "3".to_string(),
            name: "Domaine Public".to_string(),
            slug: "public-domain".to_string(),
            description: Some("Données dans le domaine public".to_string()),
            url: None,
            created_at: now.clone(),
            updated_at: now,
        },
    ]
}

pub fn seed_datasets() -> Vec<Dataset> {
    let now = Utc::now().to_rfc3339();
    vec![
        Dataset {
            id: "1".to_string(),
            title: "Indicateurs économiques du Mali 2023".to_string(),
            slug: "indicateurs-economiques-mali-2023".to_string(),
            short_description: Some(
                "Principaux indicateurs économiques du Mali pour l'année 2023".to_string(),
            ),
            description: Some(
                "Données complètes sur le PIB, l'inflation, le commerce extérieur, etc."
                    .to_string(),
            ),
            format: DatasetFormat::CSV,
            download_url: Some("/datasets/indicateurs-economiques-2023.csv".to_string()),
            api_url: None,
            spatial_coverage: Some("Mali".to_string()),
            temporal_coverage: Some("2023".to_string()),
            publication_date: "2024-01-15T00:00:00+00:00".to_string(),
            update_frequency: Some("Annuelle".to_string()),
            last_updated: "2024-01-15T00:00:00+00:00".to_string(),
            file_size: Some(245_760),
            record_count: Some(150),
            downloads_count: 342,
            views_count: 1250,
            featured: true,
            status: DatasetStatus::Published,
            current_version: 1,
            producer_id: "1".to_string(),
            theme_id: Some("1".to_string()),
            license_id: "1".to_string(),
            created_by_id: Some("1".to_string()),
            created_at: "2024-01-10T00:00:00+00:00".to_string(),
            updated_at: "2024-01-15T00:00:00+00:00".to_string(),
        },
        Dataset {
            id: "2".to_string(),
            title: "Statistiques sanitaires par région".to_string(),
            slug: "statistiques-sanitaires-regions".to_string(),
            short_description: Some(
                "Données sanitaires détaillées par région du Mali".to_string(),
            ),
            description: Some("Nombre de centres de santé, taux de vaccination, etc.".to_string()),
            format: DatasetFormat::JSON,
            download_url: Some("/datasets/sante-regions.json".to_string()),
            api_url: None,
            spatial_coverage: Some("Mali - Toutes régions".to_string()),
            temporal_coverage: Some("2022-2023".to_string()),
            publication_date: "2024-02-01T00:00:00+00:00".to_string(),
            update_frequency: Some("Mensuelle".to_string()),
            last_updated: "2024-02-01T00:00:00+00:00".to_string(),
            file_size: Some(512_000),
            record_count: Some(450),
            downloads_count: 189,
            views_count: 678,
            featured: false,
            status: DatasetStatus::Published,
            current_version: 1,
            producer_id: "2".to_string(),
            theme_id: Some("2".to_string()),
            license_id: "2".to_string(),
            created_by_id: Some("2".to_string()),
            created_at: "2024-01-25T00:00:00+00:00".to_string(),
            updated_at: "2024-02-01T00:00:00+00:00".to_string(),
        },
        Dataset {
            id: "3".to_string(),
            title: "Effectifs scolaires par niveau".to_string(),
            slug: "effectifs-scolaires-niveaux".to_string(),
            short_description: Some("Nombre d'élèves par niveau d'enseignement".to_string()),
            description: Some("Données sur les effectifs du primaire au supérieur".to_string()),
            format: DatasetFormat::CSV,
            download_url: Some("/datasets/effectifs-scolaires.csv".to_string()),
            api_url: None,
            spatial_coverage: Some("Mali".to_string()),
            temporal_coverage: Some("2023-2024".to_string()),
            publication_date: "2024-03-10T00:00:00+00:00".to_string(),
            update_frequency: Some("Annuelle".to_string()),
            last_updated: "2024-03-10T00:00:00+00:00".to_string(),
            file_size: Some(128_000),
            record_count: Some(89),
            downloads_count: 156,
            views_count: 432,
            featured: false,
            status: DatasetStatus::Published,
            current_version: 1,
            producer_id: "2".to_string(),
            theme_id: Some("3".to_string()),
            license_id: "1".to_string(),
            created_by_id: Some("2".to_string()),
            created_at: "2024-03-05T00:00:00+00:00".to_string(),
            updated_at: "2024-03-10T00:00:00+00:00".to_string(),
        },
        Dataset {
            id: "4".to_string(),
            title: "Trafic aérien - Aéroports du Mali".to_string(),
            slug: "trafic-aerien-aeroports".to_string(),
            short_description: Some(
                "Données sur le trafic aérien dans les aéroports maliens".to_string(),
            ),
            description: Some(
                "Nombre de passagers, vols, destinations par aéroport".to_string(),
            ),
            format: DatasetFormat::CSV,
            download_url: Some("/datasets/trafic-aerien.csv".to_string()),
            api_url: None,
            spatial_coverage: Some("Mali - Aéroports".to_string()),
            temporal_coverage: Some("2023".to_string()),
            publication_date: "2024-01-20T00:00:00+00:00".to_string(),
            update_frequency: Some("Mensuelle".to_string()),
            last_updated: "2024-01-20T00:00:00+00:00".to_string(),
            file_size: Some(89_000),
            record_count: Some(120),
            downloads_count: 98,
            views_count: 234,
            featured: false,
            status: DatasetStatus::Published,
            current_version: 1,
            producer_id: "3".to_string(),
            theme_id: Some("4".to_string()),
            license_id: "2".to_string(),
            created_by_id: Some("1".to_string()),
            created_at: "2024-01-15T00:00:00+00:00".to_string(),
            updated_at: "2024-01-20T00:00:00+00:00".to_string(),
        },
        Dataset {
            id: "5".to_string(),
            title: "Qualité de l'air - Bamako".to_string(),
            slug: "qualite-air-bamako".to_string(),
            short_description: Some("Données sur la qualité de l'air à Bamako".to_string()),
            description: Some("Mesures de pollution atmosphérique quotidiennes".to_string()),
            format: DatasetFormat::JSON,
            download_url: Some("/datasets/qualite-air.json".to_string()),
            api_url: None,
            spatial_coverage: Some("Bamako".to_string()),
            temporal_coverage: Some("2024".to_string()),
            publication_date: "2024-04-01T00:00:00+00:00".to_string(),
            update_frequency: Some("Quotidienne".to_string()),
            last_updated: now.clone(),
            file_size: Some(1_024_000),
            record_count: Some(365),
            downloads_count: 67,
            views_count: 189,
            featured: false,
            status: DatasetStatus::Draft,
            current_version: 1,
            producer_id: "2".to_string(),
            theme_id: Some("5".to_string()),
            license_id: "3".to_string(),
            created_by_id: Some("2".to_string()),
            created_at: "2024-03-25T00:00:00+00:00".to_string(),
            updated_at: now,
        },
    ]
}
