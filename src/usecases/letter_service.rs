//! Letter generation: snapshot roster and invited list, run the engine, hand
//! each group's field set to the renderer.

use crate::domain::{DomainError, InflectionTable, LetterBatch, LetterFields, assemble_batch};
use crate::ports::{InvitedListPort, LetterRenderer, RosterPort};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LetterService {
    roster: Arc<dyn RosterPort>,
    invited: Arc<dyn InvitedListPort>,
    renderer: Arc<dyn LetterRenderer>,
    table: Arc<InflectionTable>,
}

impl LetterService {
    pub fn new(
        roster: Arc<dyn RosterPort>,
        invited: Arc<dyn InvitedListPort>,
        renderer: Arc<dyn LetterRenderer>,
        table: Arc<InflectionTable>,
    ) -> Self {
        Self {
            roster,
            invited,
            renderer,
            table,
        }
    }

    /// Compute every letter for the current invited list. Nothing is rendered
    /// here; an error means no letter of the batch is usable.
    pub async fn prepare(&self) -> Result<LetterBatch, DomainError> {
        let invited = self.invited.load_invited().await?;
        if invited.is_empty() {
            return Err(DomainError::EmptyInvitedList);
        }
        let roster = self.roster.load_roster().await?;

        let batch = assemble_batch(&roster, &invited, &self.table)?;
        for key in &batch.skipped {
            warn!(
                work_location = %key.work_location,
                division = %key.division,
                "group holds only its responsible person, no letter"
            );
        }
        info!(
            invited = invited.len(),
            letters = batch.letters.len(),
            skipped = batch.skipped.len(),
            "letter batch prepared"
        );
        Ok(batch)
    }

    pub async fn render(&self, fields: &LetterFields) -> Result<PathBuf, DomainError> {
        self.renderer.render(fields).await
    }

    /// Prepare and render the whole batch, one group after another.
    pub async fn generate_all(&self) -> Result<Vec<PathBuf>, DomainError> {
        let batch = self.prepare().await?;
        let mut paths = Vec::with_capacity(batch.letters.len());
        for fields in &batch.letters {
            paths.push(self.render(fields).await?);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, Gender};
    use std::sync::Mutex;

    /// In-memory roster/invited store and recording renderer.
    #[derive(Default)]
    struct Fake {
        roster: Vec<Employee>,
        invited: Vec<Employee>,
        rendered: Mutex<Vec<LetterFields>>,
    }

    #[async_trait::async_trait]
    impl RosterPort for Fake {
        async fn load_roster(&self) -> Result<Vec<Employee>, DomainError> {
            Ok(self.roster.clone())
        }
        async fn save_roster(&self, _: &[Employee]) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl InvitedListPort for Fake {
        async fn load_invited(&self) -> Result<Vec<Employee>, DomainError> {
            Ok(self.invited.clone())
        }
        async fn save_invited(&self, _: &[Employee]) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl LetterRenderer for Fake {
        async fn render(&self, fields: &LetterFields) -> Result<PathBuf, DomainError> {
            let mut rendered = self.rendered.lock().unwrap();
            rendered.push(fields.clone());
            Ok(PathBuf::from(format!("letter-{}", rendered.len())))
        }
    }

    fn service(fake: Arc<Fake>) -> LetterService {
        LetterService::new(
            Arc::clone(&fake) as Arc<dyn RosterPort>,
            Arc::clone(&fake) as Arc<dyn InvitedListPort>,
            fake as Arc<dyn LetterRenderer>,
            Arc::new(InflectionTable::standard()),
        )
    }

    fn employee(id: i64, gender: Gender, division: &str) -> Employee {
        Employee::new(id, format!("n{}", id), gender)
            .with_place("وجدة", "المحكمة الابتدائية", division)
            .with_job_title("قاض")
    }

    #[tokio::test]
    async fn test_empty_invited_list() {
        let fake = Arc::new(Fake::default());
        assert!(matches!(
            service(fake).prepare().await,
            Err(DomainError::EmptyInvitedList)
        ));
    }

    #[tokio::test]
    async fn test_generate_all_renders_each_group_in_order() {
        let invited = vec![
            employee(1, Gender::Male, "أ"),
            employee(2, Gender::Female, "ب"),
            employee(3, Gender::Female, "أ"),
        ];
        let fake = Arc::new(Fake {
            roster: invited.clone(),
            invited,
            ..Default::default()
        });
        let paths = service(Arc::clone(&fake)).generate_all().await.unwrap();
        assert_eq!(paths.len(), 2);

        let rendered = fake.rendered.lock().unwrap();
        assert_eq!(rendered[0].division, "أ");
        assert_eq!(rendered[0].phrases.combined_job_title, "قاضيان");
        assert_eq!(rendered[1].division, "ب");
        assert_eq!(rendered[1].phrases.combined_job_title, "قاضية");
    }

    #[tokio::test]
    async fn test_invalid_invited_renders_nothing() {
        let mut invited = vec![employee(1, Gender::Male, "أ")];
        invited.push(Employee::new(2, "x", Gender::Male));
        let fake = Arc::new(Fake {
            roster: invited.clone(),
            invited,
            ..Default::default()
        });
        let res = service(Arc::clone(&fake)).generate_all().await;
        assert!(matches!(res, Err(DomainError::InvalidInput(_))));
        assert!(fake.rendered.lock().unwrap().is_empty());
    }
}
