//! SQLite implementation of MemberStore.
//!
//! The relational system of record: `members` and `gym_sessions` tables.
//! Every mutating call runs inside one transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::config::DatabaseConfig;
use crate::domain::attendance::{ActiveSession, MemberStats, Session};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId, SessionId, Timestamp};
use crate::domain::member::{Email, Member, MemberName, NewMember, Phone};
use crate::ports::MemberStore;

use super::connection;

/// SQLite implementation of the MemberStore port.
#[derive(Debug, Clone)]
pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    /// Wraps an existing pool. The schema must already exist.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the configured database, creating the schema if needed.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        Ok(Self::new(connection::connect(config).await?))
    }

    /// Fresh private in-memory database.
    pub async fn in_memory() -> Result<Self, DomainError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        })
        .await
    }

    /// Closes the pool, flushing pending writes.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn begin(&self) -> Result<Transaction<'_, Sqlite>, DomainError> {
        self.pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    join_date: NaiveDate,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let corrupt = |e: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid member row {}: {}", row.id, e),
            )
        };
        Ok(Member {
            id: MemberId::from_raw(row.id),
            name: MemberName::from_normalized(row.name.clone()).map_err(corrupt)?,
            email: Email::parse_optional(row.email.as_deref()).map_err(corrupt)?,
            phone: Phone::parse_optional(row.phone.as_deref()).map_err(corrupt)?,
            join_date: row.join_date,
        })
    }
}

/// Database row representation of a session.
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: i64,
    member_id: i64,
    check_in_time: DateTime<Utc>,
    check_out_time: Option<DateTime<Utc>>,
    duration_minutes: Option<i64>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: SessionId::from_raw(row.id),
            member_id: MemberId::from_raw(row.member_id),
            checked_in_at: Timestamp::from_datetime(row.check_in_time),
            checked_out_at: row.check_out_time.map(Timestamp::from_datetime),
            duration_minutes: row.duration_minutes,
        }
    }
}

/// Open session joined with its member.
#[derive(Debug, sqlx::FromRow)]
struct ActiveSessionRow {
    id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    join_date: NaiveDate,
    session_id: i64,
    check_in_time: DateTime<Utc>,
}

impl TryFrom<ActiveSessionRow> for ActiveSession {
    type Error = DomainError;

    fn try_from(row: ActiveSessionRow) -> Result<Self, Self::Error> {
        let member = Member::try_from(MemberRow {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            join_date: row.join_date,
        })?;
        Ok(ActiveSession {
            member,
            session_id: SessionId::from_raw(row.session_id),
            checked_in_at: Timestamp::from_datetime(row.check_in_time),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatsRow {
    total_visits: i64,
    total_duration: i64,
    last_visit: Option<DateTime<Utc>>,
}

const MEMBER_COLUMNS: &str = "id, name, email, phone, join_date";
const SESSION_COLUMNS: &str = "id, member_id, check_in_time, check_out_time, duration_minutes";

fn member_not_found(id: MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, format!("Member {} not found", id))
        .with_detail("member_id", id.to_string())
}

async fn fetch_member(
    tx: &mut Transaction<'_, Sqlite>,
    id: MemberId,
) -> Result<Member, DomainError> {
    let row: Option<MemberRow> =
        sqlx::query_as(&format!("SELECT {} FROM members WHERE id = ?1", MEMBER_COLUMNS))
            .bind(id.as_raw())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::database("Failed to find member", e))?;

    row.map(Member::try_from)
        .transpose()?
        .ok_or_else(|| member_not_found(id))
}

async fn fetch_open_session(
    executor: impl sqlx::Executor<'_, Database = Sqlite>,
    member_id: MemberId,
) -> Result<Option<Session>, DomainError> {
    let row: Option<SessionRow> = sqlx::query_as(&format!(
        r#"
        SELECT {}
        FROM gym_sessions
        WHERE member_id = ?1 AND check_out_time IS NULL
        ORDER BY check_in_time DESC, id DESC
        LIMIT 1
        "#,
        SESSION_COLUMNS
    ))
    .bind(member_id.as_raw())
    .fetch_optional(executor)
    .await
    .map_err(|e| DomainError::database("Failed to find open session", e))?;

    Ok(row.map(Session::from))
}

#[async_trait]
impl MemberStore for SqliteMemberStore {
    async fn add_member(&self, member: NewMember) -> Result<Member, DomainError> {
        let mut tx = self.begin().await?;

        let name_taken: Option<i64> = sqlx::query_scalar("SELECT id FROM members WHERE name = ?1")
            .bind(member.name.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to check member name", e))?;
        if name_taken.is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateName,
                format!("Member {} already exists", member.name),
            )
            .with_detail("name", member.name.as_str()));
        }

        if let Some(email) = &member.email {
            let email_taken: Option<i64> =
                sqlx::query_scalar("SELECT id FROM members WHERE email = ?1")
                    .bind(email.as_str())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(|e| DomainError::database("Failed to check member email", e))?;
            if email_taken.is_some() {
                return Err(DomainError::new(
                    ErrorCode::DuplicateEmail,
                    format!("Email {} already registered", email),
                )
                .with_detail("email", email.as_str()));
            }
        }

        let id = sqlx::query(
            r#"
            INSERT INTO members (name, email, phone, join_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(member.name.as_str())
        .bind(member.email.as_ref().map(Email::as_str))
        .bind(member.phone.as_ref().map(Phone::as_str))
        .bind(member.joined_on)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to save member", e))?
        .last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit member", e))?;

        Ok(member.into_member(MemberId::from_raw(id)))
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> =
            sqlx::query_as(&format!("SELECT {} FROM members WHERE name = ?1", MEMBER_COLUMNS))
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> =
            sqlx::query_as(&format!("SELECT {} FROM members WHERE id = ?1", MEMBER_COLUMNS))
                .bind(id.as_raw())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> =
            sqlx::query_as(&format!("SELECT {} FROM members ORDER BY name", MEMBER_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list members", e))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn open_session(
        &self,
        member_id: MemberId,
        checked_in_at: Timestamp,
    ) -> Result<Session, DomainError> {
        let mut tx = self.begin().await?;
        fetch_member(&mut tx, member_id).await?;

        let id = sqlx::query(
            r#"
            INSERT INTO gym_sessions (member_id, check_in_time)
            VALUES (?1, ?2)
            "#,
        )
        .bind(member_id.as_raw())
        .bind(*checked_in_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to save session", e))?
        .last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit session", e))?;

        Ok(Session::open(SessionId::from_raw(id), member_id, checked_in_at))
    }

    async fn close_session(
        &self,
        member_id: MemberId,
        checked_out_at: Timestamp,
    ) -> Result<Session, DomainError> {
        let mut tx = self.begin().await?;
        let member = fetch_member(&mut tx, member_id).await?;

        let mut session = fetch_open_session(&mut *tx, member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NoActiveSession,
                    format!("{} has no open session", member.name),
                )
                .with_detail("name", member.name.as_str())
            })?;

        let minutes = session.close(checked_out_at)?;

        sqlx::query(
            r#"
            UPDATE gym_sessions
            SET check_out_time = ?2, duration_minutes = ?3
            WHERE id = ?1
            "#,
        )
        .bind(session.id.as_raw())
        .bind(*checked_out_at.as_datetime())
        .bind(minutes)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to close session", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit check-out", e))?;

        Ok(session)
    }

    async fn find_open_session(&self, member_id: MemberId) -> Result<Option<Session>, DomainError> {
        fetch_open_session(&self.pool, member_id).await
    }

    async fn active_sessions(&self) -> Result<Vec<ActiveSession>, DomainError> {
        let rows: Vec<ActiveSessionRow> = sqlx::query_as(
            r#"
            SELECT m.id AS id, m.name AS name, m.email AS email, m.phone AS phone,
                   m.join_date AS join_date, s.id AS session_id,
                   s.check_in_time AS check_in_time
            FROM gym_sessions s
            JOIN members m ON m.id = s.member_id
            WHERE s.check_out_time IS NULL
            ORDER BY s.check_in_time ASC, s.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list active sessions", e))?;

        rows.into_iter().map(ActiveSession::try_from).collect()
    }

    async fn member_stats(&self, member_id: MemberId) -> Result<MemberStats, DomainError> {
        if self.find_by_id(member_id).await?.is_none() {
            return Err(member_not_found(member_id));
        }

        let row: StatsRow = sqlx::query_as(
            r#"
            SELECT COUNT(*) AS total_visits,
                   COALESCE(SUM(duration_minutes), 0) AS total_duration,
                   MAX(check_in_time) AS last_visit
            FROM gym_sessions
            WHERE member_id = ?1
            "#,
        )
        .bind(member_id.as_raw())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to compute member stats", e))?;

        Ok(MemberStats {
            total_visits: u64::try_from(row.total_visits).unwrap_or(0),
            total_duration_minutes: row.total_duration,
            last_visit: row.last_visit.map(Timestamp::from_datetime),
        })
    }

    async fn sessions_for_member(&self, member_id: MemberId) -> Result<Vec<Session>, DomainError> {
        let rows: Vec<SessionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM gym_sessions
            WHERE member_id = ?1
            ORDER BY check_in_time DESC, id DESC
            "#,
            SESSION_COLUMNS
        ))
        .bind(member_id.as_raw())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        Ok(rows.into_iter().map(Session::from).collect())
    }
}
