// src/services/review_service.rs
//
// Review edits on any item. Season reviews refresh the owning series' score
// (Series::edit_temporada recomputes it after every season edit).

use chrono::NaiveDate;

use super::catalog_service::{not_found, CatalogService};
use crate::domain::{Media, MediaId, Review};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct CreateReviewRequest {
    pub nota: f32,
    pub comentario: String,
    pub data_consumo: Option<NaiveDate>,
}

impl CreateReviewRequest {
    fn build(self) -> crate::domain::DomainResult<Review> {
        Review::new(self.nota, self.comentario, self.data_consumo)
    }
}

impl CatalogService {
    /// Append a review stamped with the current time. Returns its index.
    pub fn add_review(&mut self, id: MediaId, request: CreateReviewRequest) -> AppResult<usize> {
        let review = request.build()?;
        self.edit_info(id, |info| info.add_avaliacao(review))
    }

    /// Overwrite the review at `indice` in place; the new one gets a fresh timestamp
    pub fn replace_review(
        &mut self,
        id: MediaId,
        indice: usize,
        request: CreateReviewRequest,
    ) -> AppResult<Review> {
        let review = request.build()?;
        self.edit_info(id, |info| info.replace_avaliacao(indice, review))
    }

    pub fn remove_review(&mut self, id: MediaId, indice: usize) -> AppResult<Review> {
        self.edit_info(id, |info| info.remove_avaliacao(indice))
    }

    /// Reviews attached directly to an item
    pub fn reviews(&self, id: MediaId) -> AppResult<Vec<Review>> {
        self.catalog()
            .find(id)
            .map(|m| m.avaliacoes().to_vec())
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::repositories::catalog_repository::MockCatalogRepository;
    use crate::services::catalog_service::tests::{book_request, film_request, service_with};
    use chrono::{Duration, Local, NaiveDateTime};

    fn review(nota: f32) -> CreateReviewRequest {
        CreateReviewRequest {
            nota,
            comentario: "Muito bom".to_string(),
            data_consumo: None,
        }
    }

    #[test]
    fn test_review_preconditions() {
        let mut mock = MockCatalogRepository::new();
        // create + one accepted review
        mock.expect_save_books().times(2).returning(|_| Ok(()));
        let mut service = service_with(mock);
        let id = service.create_book(book_request("O Hobbit")).unwrap();

        let err = service.add_review(id, review(6.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeViolation);

        let amanha = CreateReviewRequest {
            data_consumo: Some(Local::now().date_naive() + Duration::days(1)),
            ..review(4.0)
        };
        assert_eq!(service.add_review(id, amanha).unwrap_err().kind(), ErrorKind::RangeViolation);

        let vazio = CreateReviewRequest {
            comentario: " ".to_string(),
            ..review(4.0)
        };
        assert_eq!(service.add_review(id, vazio).unwrap_err().kind(), ErrorKind::InputFormat);
        assert!(service.reviews(id).unwrap().is_empty());

        assert_eq!(service.add_review(id, review(4.5)).unwrap(), 0);
        let gravadas = service.reviews(id).unwrap();
        assert_eq!(gravadas.len(), 1);
        assert!(NaiveDateTime::parse_from_str(gravadas[0].data_avaliacao(), "%d/%m/%Y %H:%M:%S").is_ok());
    }

    #[test]
    fn test_unconsumed_media_cannot_be_reviewed() {
        let mut mock = MockCatalogRepository::new();
        mock.expect_save_films().times(3).returning(|_| Ok(()));
        let mut service = service_with(mock);
        let id = service.create_film(film_request("Interestelar", 169)).unwrap();

        let err = service.add_review(id, review(4.8)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);

        service.set_consumed(id, true).unwrap();
        service.add_review(id, review(4.8)).unwrap();
        assert_eq!(service.catalog().list_films()[0].latest_score(), 4.8);
    }

    #[test]
    fn test_replace_and_remove_by_index() {
        let mut mock = MockCatalogRepository::new();
        mock.expect_save_books().times(4).returning(|_| Ok(()));
        let mut service = service_with(mock);
        let id = service.create_book(book_request("O Hobbit")).unwrap();
        service.add_review(id, review(3.0)).unwrap();

        assert_eq!(service.replace_review(id, 5, review(4.0)).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(service.replace_review(id, 0, review(4.0)).unwrap().nota(), 3.0);
        assert_eq!(service.reviews(id).unwrap()[0].nota(), 4.0);

        assert_eq!(service.remove_review(id, 0).unwrap().nota(), 4.0);
        assert_eq!(service.remove_review(id, 0).unwrap_err().kind(), ErrorKind::NotFound);
    }
}
