//! Administrative tools for Jobify.
//!
//! Admin routes are never public, so the first superadmin has to be created
//! here, against the database directly.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use jobify_auth::AdminRole;
use jobify_core::hash_password_blocking;
use jobify_db::{PgPool, init_db_pool, is_unique_violation};
use jobify_models::CreateAdminDto;
use uuid::Uuid;
use validator::Validate;

#[derive(Parser)]
#[command(name = "jobify-cli")]
#[command(about = "Jobify CLI - Administrative tools for Jobify", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role: superadmin or moderator
        #[arg(short = 'r', long, default_value = "superadmin")]
        role: AdminRole,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
            role,
        } => handle_create_admin(&pool, name, email, password, role).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: AdminRole,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let dto = CreateAdminDto {
        name,
        email,
        password,
        role,
    };
    dto.validate().context("Invalid admin details")?;

    let id = insert_admin(pool, &dto).await?;

    println!("\n✅ Admin created successfully!");
    println!("   ID: {}", id);
    println!("   Email: {}", dto.email);
    println!("   Role: {}", dto.role);
    Ok(())
}

async fn insert_admin(db: &PgPool, dto: &CreateAdminDto) -> anyhow::Result<Uuid> {
    let password_hash = hash_password_blocking(dto.password.clone())
        .await
        .map_err(|e| e.error)?;

    let result = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO admins (name, email, password_hash, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&dto.name)
    .bind(&dto.email)
    .bind(&password_hash)
    .bind(dto.role)
    .fetch_one(db)
    .await;

    match result {
        Ok(id) => Ok(id),
        Err(e) if is_unique_violation(&e) => bail!("An admin with email {} already exists", dto.email),
        Err(e) => Err(e.into()),
    }
}
