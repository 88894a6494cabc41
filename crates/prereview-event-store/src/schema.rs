//! Event store database schema.

/// SQL to create the events table.
///
/// `position` gives whole-log reads a global append order; per-resource
/// order comes from `resource_version`.
pub const CREATE_EVENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS events (
    position         BIGINT GENERATED ALWAYS AS IDENTITY,
    event_id         UUID PRIMARY KEY,
    resource_id      UUID NOT NULL,
    resource_type    VARCHAR(64) NOT NULL,
    resource_version BIGINT NOT NULL CHECK (resource_version > 0),
    event_type       VARCHAR(255) NOT NULL,
    payload          JSONB NOT NULL,
    occurred_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (resource_id, resource_version)
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_events_position
    ON events (position);

CREATE INDEX IF NOT EXISTS idx_events_resource_type_position
    ON events (resource_type, position);
";
