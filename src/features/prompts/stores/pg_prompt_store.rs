use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

use super::PromptStore;

/// PostgreSQL implementation of PromptStore
pub struct PgPromptStore {
    pool: PgPool,
}

impl std::fmt::Debug for PgPromptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPromptStore")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl PgPromptStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptStore for PgPromptStore {
    async fn list(&self) -> Result<Vec<Prompt>> {
        let prompts = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT id, name, description, content, created_at, updated_at
            FROM prompts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    async fn find_by_id(&self, id: PromptId) -> Result<Option<Prompt>> {
        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT id, name, description, content, created_at, updated_at
            FROM prompts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(prompt)
    }

    async fn insert(&self, fields: &PromptFields) -> Result<Prompt> {
        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            INSERT INTO prompts (name, description, content)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, content, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(prompt)
    }

    async fn update(&self, id: PromptId, fields: &PromptFields) -> Result<Option<Prompt>> {
        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            UPDATE prompts
            SET name = $1,
                description = $2,
                content = $3,
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, description, content, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(prompt)
    }

    async fn delete(&self, id: PromptId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
