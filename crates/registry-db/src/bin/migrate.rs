use registry_db::Database;

#[tokio::main]
async fn main() {
    let Ok(db_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL must be set");
        std::process::exit(1);
    };
    let db = match Database::connect(&db_url).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("failed to connect to database: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = db.migrate().await {
        eprintln!("failed to run migrations: {err}");
        std::process::exit(1);
    }
    db.close().await;
    println!("migrations applied ({})", db.backend().as_str());
}
