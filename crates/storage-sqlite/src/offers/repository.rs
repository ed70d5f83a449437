use bond_recommender_core::offers::{NewOffer, Offer, OfferRepositoryTrait};
use bond_recommender_core::Result;
use diesel::prelude::*;

use super::model::{NewOfferDB, OfferDB};
use crate::errors::IntoCore;
use crate::schema::offers;
use crate::store::SqliteTx;

impl OfferRepositoryTrait for SqliteTx {
    fn list_bond_offers(&mut self, bond_id: i64) -> Result<Vec<Offer>> {
        let rows = offers::table
            .filter(offers::bond_id.eq(bond_id))
            .order((offers::date.asc(), offers::id.asc()))
            .select(OfferDB::as_select())
            .load(self.conn())
            .into_core()?;
        rows.into_iter().map(Offer::try_from).collect()
    }

    fn create_offer(&mut self, new_offer: NewOffer) -> Result<Offer> {
        let row: NewOfferDB = new_offer.into();
        let created = diesel::insert_into(offers::table)
            .values(&row)
            .returning(OfferDB::as_returning())
            .get_result(self.conn())
            .into_core()?;
        Offer::try_from(created)
    }
}
