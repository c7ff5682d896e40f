//! Database repository for CRUD operations.
//!
//! Every write is a single independent row operation: insert one row,
//! replace one row by id, delete one row by id. No multi-row atomicity is
//! assumed by the callers.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Accommodation, AccommodationType, Attendee, AttendeeType, BulletinMessage, BulletinReply,
    CartItem, PaymentMethod, Product, ProgrammeEvent, StaffShift, TicketType, Transaction, User,
    UserRole, VolunteerShift,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ==================== USER OPERATIONS ====================

    /// List all login accounts.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query("SELECT username, password, role FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a user by exact username.
    pub async fn get_user(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query("SELECT username, password, role FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Look up a user ignoring username case. Used for uniqueness checks.
    pub async fn get_user_ci(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT username, password, role FROM users WHERE LOWER(username) = LOWER(?)",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Create a login account.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.password)
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Replace a login account's credential and role.
    pub async fn update_user(&self, user: &User) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password = ?, role = ? WHERE username = ?")
            .bind(&user.password)
            .bind(user.role.as_str())
            .bind(&user.username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                user.username
            )));
        }
        Ok(())
    }

    /// Delete a login account.
    pub async fn delete_user(&self, username: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", username)));
        }
        Ok(())
    }

    // ==================== ATTENDEE OPERATIONS ====================

    /// List all attendees.
    pub async fn list_attendees(&self) -> Result<Vec<Attendee>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, type, contact, phone, paid, ticket_tier, position, notes, check_in_time FROM attendees ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(attendee_from_row).collect())
    }

    /// Get an attendee by ID.
    pub async fn get_attendee(&self, id: &str) -> Result<Option<Attendee>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, type, contact, phone, paid, ticket_tier, position, notes, check_in_time FROM attendees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(attendee_from_row))
    }

    /// Insert a new attendee record.
    pub async fn create_attendee(&self, attendee: &Attendee) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO attendees (id, name, type, contact, phone, paid, ticket_tier, position, notes, check_in_time) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&attendee.id)
        .bind(&attendee.name)
        .bind(attendee.attendee_type.as_str())
        .bind(&attendee.contact)
        .bind(&attendee.phone)
        .bind(attendee.paid.map(|b| b as i32))
        .bind(attendee.ticket_tier.as_ref().map(|t| t.as_str()))
        .bind(&attendee.position)
        .bind(&attendee.notes)
        .bind(&attendee.check_in_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Replace an attendee record in full. Last write wins.
    pub async fn update_attendee(&self, attendee: &Attendee) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE attendees SET name = ?, type = ?, contact = ?, phone = ?, paid = ?, ticket_tier = ?, position = ?, notes = ?, check_in_time = ? WHERE id = ?",
        )
        .bind(&attendee.name)
        .bind(attendee.attendee_type.as_str())
        .bind(&attendee.contact)
        .bind(&attendee.phone)
        .bind(attendee.paid.map(|b| b as i32))
        .bind(attendee.ticket_tier.as_ref().map(|t| t.as_str()))
        .bind(&attendee.position)
        .bind(&attendee.notes)
        .bind(&attendee.check_in_time)
        .bind(&attendee.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Attendee {} not found",
                attendee.id
            )));
        }
        Ok(())
    }

    /// Set or clear an attendee's check-in timestamp.
    pub async fn set_check_in(&self, id: &str, time: Option<&str>) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE attendees SET check_in_time = ? WHERE id = ?")
            .bind(time)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attendee {} not found", id)));
        }
        Ok(())
    }

    /// Delete an attendee record.
    pub async fn delete_attendee(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM attendees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attendee {} not found", id)));
        }
        Ok(())
    }

    // ==================== PROGRAMME EVENT OPERATIONS ====================

    /// List all programme events.
    pub async fn list_events(&self) -> Result<Vec<ProgrammeEvent>, AppError> {
        let rows = sqlx::query(
            "SELECT id, date, day, time, stage, event_name, details FROM events ORDER BY day, time",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    pub async fn create_event(&self, event: &ProgrammeEvent) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO events (id, date, day, time, stage, event_name, details) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(&event.date)
        .bind(&event.day)
        .bind(&event.time)
        .bind(&event.stage)
        .bind(&event.event_name)
        .bind(&event.details)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_event(&self, event: &ProgrammeEvent) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE events SET date = ?, day = ?, time = ?, stage = ?, event_name = ?, details = ? WHERE id = ?",
        )
        .bind(&event.date)
        .bind(&event.day)
        .bind(&event.time)
        .bind(&event.stage)
        .bind(&event.event_name)
        .bind(&event.details)
        .bind(&event.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", event.id)));
        }
        Ok(())
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }

    // ==================== SHIFT OPERATIONS ====================

    /// List all staff shifts.
    pub async fn list_staff_shifts(&self) -> Result<Vec<StaffShift>, AppError> {
        let rows = sqlx::query(
            "SELECT id, date, day, time, attendee_ids, role, locations FROM staff_shifts ORDER BY day, time",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(staff_shift_from_row).collect())
    }

    pub async fn create_staff_shift(&self, shift: &StaffShift) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO staff_shifts (id, date, day, time, attendee_ids, role, locations) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&shift.id)
        .bind(&shift.date)
        .bind(&shift.day)
        .bind(&shift.time)
        .bind(to_json(&shift.attendee_ids))
        .bind(&shift.role)
        .bind(to_json(&shift.locations))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_staff_shift(&self, shift: &StaffShift) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE staff_shifts SET date = ?, day = ?, time = ?, attendee_ids = ?, role = ?, locations = ? WHERE id = ?",
        )
        .bind(&shift.date)
        .bind(&shift.day)
        .bind(&shift.time)
        .bind(to_json(&shift.attendee_ids))
        .bind(&shift.role)
        .bind(to_json(&shift.locations))
        .bind(&shift.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Staff shift {} not found",
                shift.id
            )));
        }
        Ok(())
    }

    pub async fn delete_staff_shift(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM staff_shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff shift {} not found", id)));
        }
        Ok(())
    }

    /// List all volunteer shifts.
    pub async fn list_volunteer_shifts(&self) -> Result<Vec<VolunteerShift>, AppError> {
        let rows = sqlx::query(
            "SELECT id, date, day, time, attendee_ids, task, locations FROM volunteer_shifts ORDER BY day, time",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(volunteer_shift_from_row).collect())
    }

    pub async fn create_volunteer_shift(&self, shift: &VolunteerShift) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO volunteer_shifts (id, date, day, time, attendee_ids, task, locations) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&shift.id)
        .bind(&shift.date)
        .bind(&shift.day)
        .bind(&shift.time)
        .bind(to_json(&shift.attendee_ids))
        .bind(&shift.task)
        .bind(to_json(&shift.locations))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_volunteer_shift(&self, shift: &VolunteerShift) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE volunteer_shifts SET date = ?, day = ?, time = ?, attendee_ids = ?, task = ?, locations = ? WHERE id = ?",
        )
        .bind(&shift.date)
        .bind(&shift.day)
        .bind(&shift.time)
        .bind(to_json(&shift.attendee_ids))
        .bind(&shift.task)
        .bind(to_json(&shift.locations))
        .bind(&shift.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Volunteer shift {} not found",
                shift.id
            )));
        }
        Ok(())
    }

    pub async fn delete_volunteer_shift(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM volunteer_shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Volunteer shift {} not found",
                id
            )));
        }
        Ok(())
    }

    // ==================== ACCOMMODATION OPERATIONS ====================

    /// List all accommodation units.
    pub async fn list_accommodations(&self) -> Result<Vec<Accommodation>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, type, capacity, attendee_ids FROM accommodations ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(accommodation_from_row).collect())
    }

    pub async fn create_accommodation(&self, unit: &Accommodation) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO accommodations (id, name, type, capacity, attendee_ids) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&unit.id)
        .bind(&unit.name)
        .bind(unit.accommodation_type.as_str())
        .bind(unit.capacity)
        .bind(to_json(&unit.attendee_ids))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persist a unit's membership after an allocator call.
    pub async fn save_accommodation_members(&self, unit: &Accommodation) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE accommodations SET attendee_ids = ? WHERE id = ?")
            .bind(to_json(&unit.attendee_ids))
            .bind(&unit.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Accommodation {} not found",
                unit.id
            )));
        }
        Ok(())
    }

    // ==================== TILL OPERATIONS ====================

    /// List the till catalogue.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query("SELECT id, name, price, color FROM products ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(product_from_row).collect())
    }

    pub async fn create_product(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query("INSERT INTO products (id, name, price, color) VALUES (?, ?, ?, ?)")
            .bind(&product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.color)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// List sale records, newest first.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let rows = sqlx::query(
            "SELECT id, timestamp, items, total, method FROM transactions ORDER BY timestamp DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(transaction_from_row).collect())
    }

    /// Append a sale record. Transactions are never updated or deleted.
    pub async fn create_transaction(&self, tx: &Transaction) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO transactions (id, timestamp, items, total, method) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&tx.id)
        .bind(&tx.timestamp)
        .bind(serde_json::to_string(&tx.items).unwrap_or_default())
        .bind(tx.total)
        .bind(tx.method.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // ==================== BULLETIN OPERATIONS ====================

    /// List all bulletin messages.
    pub async fn list_bulletins(&self) -> Result<Vec<BulletinMessage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, author, content, timestamp, audience, likes, replies FROM bulletins ORDER BY timestamp DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(bulletin_from_row).collect())
    }

    /// Get a bulletin by ID.
    pub async fn get_bulletin(&self, id: &str) -> Result<Option<BulletinMessage>, AppError> {
        let row = sqlx::query(
            "SELECT id, author, content, timestamp, audience, likes, replies FROM bulletins WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(bulletin_from_row))
    }

    pub async fn create_bulletin(&self, msg: &BulletinMessage) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO bulletins (id, author, content, timestamp, audience, likes, replies) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&msg.id)
        .bind(&msg.author)
        .bind(&msg.content)
        .bind(&msg.timestamp)
        .bind(to_json(&msg.audience))
        .bind(to_json(&msg.likes))
        .bind(serde_json::to_string(&msg.replies).unwrap_or_default())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persist a bulletin's likes list after a toggle.
    pub async fn save_bulletin_likes(&self, id: &str, likes: &[String]) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE bulletins SET likes = ? WHERE id = ?")
            .bind(to_json(likes))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bulletin {} not found", id)));
        }
        Ok(())
    }

    /// Persist a bulletin's replies list after an append.
    pub async fn save_bulletin_replies(
        &self,
        id: &str,
        replies: &[BulletinReply],
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE bulletins SET replies = ? WHERE id = ?")
            .bind(serde_json::to_string(replies).unwrap_or_default())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bulletin {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete_bulletin(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bulletins WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bulletin {} not found", id)));
        }
        Ok(())
    }
}

// Helper functions for row conversion

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    let role: String = row.get("role");
    User {
        username: row.get("username"),
        password: row.get("password"),
        role: UserRole::parse(&role).unwrap_or(UserRole::Staff),
    }
}

fn attendee_from_row(row: &sqlx::sqlite::SqliteRow) -> Attendee {
    let attendee_type: String = row.get("type");
    let paid: Option<i32> = row.get("paid");
    let ticket_tier: Option<String> = row.get("ticket_tier");
    Attendee {
        id: row.get("id"),
        name: row.get("name"),
        attendee_type: AttendeeType::parse(&attendee_type).unwrap_or(AttendeeType::Customer),
        contact: row.get("contact"),
        phone: row.get("phone"),
        paid: paid.map(|v| v != 0),
        ticket_tier: ticket_tier.and_then(|t| TicketType::parse(&t)),
        position: row.get("position"),
        notes: row.get("notes"),
        check_in_time: row.get("check_in_time"),
    }
}

fn event_from_row(row: &sqlx::sqlite::SqliteRow) -> ProgrammeEvent {
    ProgrammeEvent {
        id: row.get("id"),
        date: row.get("date"),
        day: row.get("day"),
        time: row.get("time"),
        stage: row.get("stage"),
        event_name: row.get("event_name"),
        details: row.get("details"),
    }
}

fn staff_shift_from_row(row: &sqlx::sqlite::SqliteRow) -> StaffShift {
    let attendee_ids: String = row.get("attendee_ids");
    let locations: String = row.get("locations");
    StaffShift {
        id: row.get("id"),
        date: row.get("date"),
        day: row.get("day"),
        time: row.get("time"),
        attendee_ids: parse_json_array(&attendee_ids),
        role: row.get("role"),
        locations: parse_json_array(&locations),
    }
}

fn volunteer_shift_from_row(row: &sqlx::sqlite::SqliteRow) -> VolunteerShift {
    let attendee_ids: String = row.get("attendee_ids");
    let locations: String = row.get("locations");
    VolunteerShift {
        id: row.get("id"),
        date: row.get("date"),
        day: row.get("day"),
        time: row.get("time"),
        attendee_ids: parse_json_array(&attendee_ids),
        task: row.get("task"),
        locations: parse_json_array(&locations),
    }
}

fn accommodation_from_row(row: &sqlx::sqlite::SqliteRow) -> Accommodation {
    let accommodation_type: String = row.get("type");
    let attendee_ids: String = row.get("attendee_ids");
    Accommodation {
        id: row.get("id"),
        name: row.get("name"),
        accommodation_type: AccommodationType::parse(&accommodation_type)
            .unwrap_or(AccommodationType::Yurt),
        capacity: row.get("capacity"),
        attendee_ids: parse_json_array(&attendee_ids),
    }
}

fn product_from_row(row: &sqlx::sqlite::SqliteRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
        color: row.get("color"),
    }
}

fn transaction_from_row(row: &sqlx::sqlite::SqliteRow) -> Transaction {
    let items: String = row.get("items");
    let method: String = row.get("method");
    let items: Vec<CartItem> = serde_json::from_str(&items).unwrap_or_default();
    Transaction {
        id: row.get("id"),
        timestamp: row.get("timestamp"),
        items,
        total: row.get("total"),
        method: PaymentMethod::parse(&method).unwrap_or(PaymentMethod::Cash),
    }
}

fn bulletin_from_row(row: &sqlx::sqlite::SqliteRow) -> BulletinMessage {
    let audience: String = row.get("audience");
    let likes: String = row.get("likes");
    let replies: String = row.get("replies");
    let replies: Vec<BulletinReply> = serde_json::from_str(&replies).unwrap_or_default();
    BulletinMessage {
        id: row.get("id"),
        author: row.get("author"),
        content: row.get("content"),
        timestamp: row.get("timestamp"),
        audience: parse_json_array(&audience),
        likes: parse_json_array(&likes),
        replies,
    }
}

fn to_json(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_default()
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}
