use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use thiserror::Error;

use crate::models::{MissionListing, NewMission, NewUser, Profile, Tag, User, UserType};
use crate::services::auth::hash_password;

/// Errors that can occur when interacting with storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Persistence for accounts, associations and missions
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert an account. Association accounts get their association row
    /// in the same transaction.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Association owned by `user_id`, created from the user's name if missing
    async fn association_for_user(&self, user_id: i64) -> Result<i64, StoreError>;

    async fn create_mission(&self, association_id: i64, mission: NewMission) -> Result<i64, StoreError>;

    /// Active missions, newest first
    async fn list_active_missions(&self) -> Result<Vec<MissionListing>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// Stored profile score of the demo citizen
const DEMO_CITIZEN_SCORE: i64 = 85;

/// SQLite-backed store
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `database_url` and run migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("SQLite store ready at {}", database_url);

        Ok(Self { pool })
    }

    /// Insert the demo association, citizen and missions into an empty database
    ///
    /// Returns `false` without touching anything when users already exist.
    pub async fn seed_demo_data(&self) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            tracing::debug!("Skipping demo data, {} users present", count);
            return Ok(false);
        }

        tracing::info!("Inserting demo data...");

        let password = hash_password("demo123");
        let mut tx = self.pool.begin().await?;

        let assoc_user_id = sqlx::query(
            "INSERT INTO users (email, password, user_type, name, city, job) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind("greenpeace@demo.org")
        .bind(&password)
        .bind(UserType::Association.as_str())
        .bind("Greenpeace Maroc")
        .bind("Casablanca")
        .bind("ONG Environnementale")
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let assoc_id = sqlx::query(
            "INSERT INTO associations (user_id, name, description, verified, impact_score) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(assoc_user_id)
        .bind("Greenpeace Maroc")
        .bind("Protection de l'environnement et sensibilisation climatique")
        .bind(true)
        .bind(92.0_f64)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let citizen = Profile {
            name: "Amira Benali".to_string(),
            city: "Tunis".to_string(),
            age: 24,
            job: "Designer UX".to_string(),
            skills: to_strings(&["Design UX/UI", "Communication", "Social Media"]),
            values: to_strings(&["🌱 Environnement", "📚 Éducation"]),
            availability: to_strings(&["Lundi soir", "Mercredi soir", "Télétravail OK"]),
        };

        sqlx::query(
            "INSERT INTO users (email, password, user_type, name, city, age, job, skills, user_values, availability, profile_score)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind("amira@example.com")
        .bind(&password)
        .bind(UserType::Citizen.as_str())
        .bind(&citizen.name)
        .bind(&citizen.city)
        .bind(citizen.age as i64)
        .bind(&citizen.job)
        .bind(serde_json::to_string(&citizen.skills)?)
        .bind(serde_json::to_string(&citizen.values)?)
        .bind(serde_json::to_string(&citizen.availability)?)
        .bind(DEMO_CITIZEN_SCORE)
        .execute(&mut *tx)
        .await?;

        for mission in demo_missions() {
            insert_mission(&mut tx, assoc_id, &mission).await?;
        }

        tx.commit().await?;

        tracing::info!("Demo data inserted");
        Ok(true)
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tx = self.pool.begin().await?;
        let profile = &user.profile;

        let result = sqlx::query(
            "INSERT INTO users (email, password, user_type, name, city, age, job, skills, user_values, availability, profile_score)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.user_type.as_str())
        .bind(&profile.name)
        .bind(&profile.city)
        .bind(profile.age as i64)
        .bind(&profile.job)
        .bind(serde_json::to_string(&profile.skills)?)
        .bind(serde_json::to_string(&profile.values)?)
        .bind(serde_json::to_string(&profile.availability)?)
        .bind(user.profile_score as i64)
        .execute(&mut *tx)
        .await;

        let user_id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(StoreError::Conflict(format!("email {} already registered", user.email)));
            }
            Err(e) => return Err(e.into()),
        };

        if user.user_type == UserType::Association {
            sqlx::query("INSERT INTO associations (user_id, name) VALUES (?, ?)")
                .bind(user_id)
                .bind(&profile.name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!("Created {} account {}", user.user_type.as_str(), user_id);

        Ok(User {
            id: user_id,
            email: user.email,
            password_hash: user.password_hash,
            user_type: user.user_type,
            name: user.profile.name,
            city: user.profile.city,
            age: user.profile.age,
            job: user.profile.job,
            skills: user.profile.skills,
            values: user.profile.values,
            availability: user.profile.availability,
            profile_score: user.profile_score,
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn association_for_user(&self, user_id: i64) -> Result<i64, StoreError> {
        let user = self
            .find_user(user_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

        // Concurrent callers race on the unique user_id; the loser inserts nothing
        let inserted = sqlx::query(
            "INSERT INTO associations (user_id, name) VALUES (?, ?) ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(&user.name)
        .execute(&self.pool)
        .await?
        .rows_affected();

        let id: i64 = sqlx::query_scalar("SELECT id FROM associations WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        if inserted > 0 {
            tracing::info!("Created association {} for user {}", id, user_id);
        }

        Ok(id)
    }

    async fn create_mission(&self, association_id: i64, mission: NewMission) -> Result<i64, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let id = insert_mission(&mut conn, association_id, &mission).await?;

        tracing::debug!("Created mission {} for association {}", id, association_id);

        Ok(id)
    }

    async fn list_active_missions(&self) -> Result<Vec<MissionListing>, StoreError> {
        let query = r#"
            SELECT m.id, m.title, m.emoji, m.impact_description, m.tags,
                   m.location, m.commitment, m.urgent, a.name AS org_name
            FROM missions m
            LEFT JOIN associations a ON m.association_id = a.id
            WHERE m.status = 'active'
            ORDER BY m.created_at DESC, m.id DESC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        rows.iter().map(listing_from_row).collect()
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

async fn insert_mission(
    conn: &mut sqlx::SqliteConnection,
    association_id: i64,
    mission: &NewMission,
) -> Result<i64, StoreError> {
    let id = sqlx::query(
        "INSERT INTO missions (association_id, title, emoji, impact_description, location, commitment, urgent, skills_required, tags)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(association_id)
    .bind(&mission.title)
    .bind(&mission.emoji)
    .bind(&mission.impact)
    .bind(&mission.location)
    .bind(&mission.commitment)
    .bind(mission.urgent)
    .bind(serde_json::to_string(&mission.skills_required)?)
    .bind(serde_json::to_string(&mission.tags)?)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

fn user_from_row(row: &SqliteRow) -> Result<User, StoreError> {
    let user_type: String = row.try_get("user_type")?;

    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password")?,
        user_type: UserType::parse(&user_type).unwrap_or(UserType::Citizen),
        name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        city: row.try_get::<Option<String>, _>("city")?.unwrap_or_default(),
        age: row.try_get::<Option<i64>, _>("age")?.unwrap_or(0).max(0) as u32,
        job: row.try_get::<Option<String>, _>("job")?.unwrap_or_default(),
        skills: json_list(row.try_get("skills")?),
        values: json_list(row.try_get("user_values")?),
        availability: json_list(row.try_get("availability")?),
        profile_score: row
            .try_get::<Option<i64>, _>("profile_score")?
            .unwrap_or(0)
            .clamp(0, 100) as u8,
    })
}

fn listing_from_row(row: &SqliteRow) -> Result<MissionListing, StoreError> {
    let tags: Option<String> = row.try_get("tags")?;
    let tags = match tags.filter(|t| !t.is_empty()) {
        Some(json) => Some(serde_json::from_str::<Vec<Tag>>(&json)?),
        None => None,
    };

    Ok(MissionListing {
        id: row.try_get("id")?,
        org_name: row.try_get("org_name")?,
        title: row.try_get("title")?,
        emoji: row.try_get("emoji")?,
        impact: row.try_get("impact_description")?,
        tags,
        location: row.try_get("location")?,
        commitment: row.try_get("commitment")?,
        urgent: row.try_get::<Option<bool>, _>("urgent")?.unwrap_or(false),
    })
}

fn json_list(raw: Option<String>) -> Vec<String> {
    raw.and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn demo_missions() -> Vec<NewMission> {
    let mission = |title: &str,
                   emoji: &str,
                   impact: &str,
                   location: &str,
                   commitment: &str,
                   urgent: bool,
                   skills: [(&str, &str); 2],
                   tags: [(&str, &str); 2]| NewMission {
        title: title.to_string(),
        emoji: emoji.to_string(),
        impact: impact.to_string(),
        commitment: commitment.to_string(),
        location: Some(location.to_string()),
        urgent,
        skills_required: skills.iter().map(|(t, c)| Tag::new(t, c)).collect(),
        tags: tags.iter().map(|(t, c)| Tag::new(t, c)).collect(),
    };

    vec![
        mission(
            "Chargé·e de communication digitale",
            "🌊",
            "Gérer les réseaux sociaux de la campagne \"Océans Propres\" pour toucher +10K personnes.",
            "À distance",
            "8h/mois",
            false,
            [("Social Media", "s"), ("Rédaction", "s")],
            [("Créativité", "v"), ("Autonomie", "v")],
        ),
        mission(
            "Designer de contenus",
            "🎨",
            "Créer des visuels pour sensibiliser 5000 personnes aux droits de l'enfant.",
            "À distance",
            "5h/mois",
            true,
            [("Design UX", "s"), ("Photoshop", "s")],
            [("Créativité", "v"), ("Empathie", "v")],
        ),
        mission(
            "Mentor informatique pour ados",
            "💻",
            "Accompagner 8 jeunes (12-17 ans) dans l'apprentissage du code",
            "Tunis El Menzah",
            "4h/mois",
            true,
            [("Dev Web", "s"), ("Python", "s")],
            [("Pédagogie", "v"), ("Patience", "v")],
        ),
    ]
}
