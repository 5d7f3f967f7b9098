multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

/// Single privileged account, recorded when the contract is deployed.
#[multiversx_sc::module]
pub trait AdminModule {
    fn init_admin(&self) {
        let caller = self.blockchain().get_caller();
        self.admin_address().set(&caller);
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin_address().get(), ERR_UNAUTHORIZED);
    }

    #[view(getAdmin)]
    #[storage_mapper("adminAddress")]
    fn admin_address(&self) -> SingleValueMapper<ManagedAddress>;
}
