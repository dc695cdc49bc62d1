/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (trip start/end, itinerary days, due dates).
pub type Date = chrono::NaiveDate;

/// Wall-clock times without a date (itinerary slots, meal times).
pub type Time = chrono::NaiveTime;
