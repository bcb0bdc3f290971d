use crate::books::catalog::GuardedCatalog;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration, catalog: GuardedCatalog) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(catalog);
    Box::new(CatalogServiceImpl::new(config, book_repo))
}
