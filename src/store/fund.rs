use crate::{
    models::Fund,
    store::{ErrorPayload, Phase},
};

/// The fund catalogue and the fund opened on the detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundState {
    pub funds: Vec<Fund>,
    pub current_fund: Option<Fund>,
    pub loading: bool,
    pub error: Option<ErrorPayload>,
}

/// The transitions of [FundState].
#[derive(Debug, Clone, PartialEq)]
pub enum FundEvent {
    FetchAll(Phase<Vec<Fund>>),
    FetchDetails(Phase<Fund>),
}

impl FundState {
    pub fn reduce(&mut self, event: FundEvent) {
        match event {
            FundEvent::FetchAll(Phase::Pending) | FundEvent::FetchDetails(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            FundEvent::FetchAll(Phase::Fulfilled(funds)) => {
                self.loading = false;
                self.funds = funds;
            }
            FundEvent::FetchDetails(Phase::Fulfilled(fund)) => {
                self.loading = false;
                self.current_fund = Some(fund);
            }
            FundEvent::FetchAll(Phase::Rejected(error))
            | FundEvent::FetchDetails(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
            }
        }
    }
}
