use crate::{model, Database};

/// Appends an [`model::Action`] row for an authenticated request.
pub async fn record(
	database: &Database,
	user_id: i64,
	ip: &str,
	path: &str,
) -> Result<model::Action, sqlx::Error> {
	sqlx::query_as::<_, model::Action>(
		r"
			INSERT INTO action (user_ip_address, action_time, action_path, user_id)
			VALUES (?, ?, ?, ?)
			RETURNING *
		",
	)
	.bind(ip)
	.bind(chrono::Utc::now())
	.bind(path)
	.bind(user_id)
	.fetch_one(database)
	.await
}
