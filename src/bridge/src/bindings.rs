/// Ethereum contract bindings for the WETH and SpokePool contracts.
use ethers::{abi::Contract as EthersContract, prelude::*};
use std::sync::Arc;

/// The WETH9 contract interface
pub struct WethContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> WethContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, client: impl Into<Arc<M>>) -> Self {
        let abi = include_str!("../contracts/WETH9.abi");
        let contract = Contract::new(
            address,
            serde_json::from_str::<EthersContract>(abi).expect("Invalid ABI"),
            client.into(),
        );
        Self { contract }
    }

    /// Wraps the native currency sent as call value
    pub fn deposit(&self) -> ContractCall<M, ()> {
        self.contract.method("deposit", ()).expect("Method not found")
    }

    /// Unwraps `wad` WETH back to the native currency
    pub fn withdraw(&self, wad: U256) -> ContractCall<M, ()> {
        self.contract.method("withdraw", (wad,)).expect("Method not found")
    }

    /// Authorizes `guy` to transfer up to `wad` WETH
    pub fn approve(&self, guy: Address, wad: U256) -> ContractCall<M, bool> {
        self.contract
            .method("approve", (guy, wad))
            .expect("Method not found")
    }

    /// Gets the WETH balance of an account
    pub fn balance_of(&self, owner: Address) -> ContractCall<M, U256> {
        self.contract
            .method("balanceOf", (owner,))
            .expect("Method not found")
    }

    /// Gets the remaining allowance from `owner` to `spender`
    pub fn allowance(&self, owner: Address, spender: Address) -> ContractCall<M, U256> {
        self.contract
            .method("allowance", (owner, spender))
            .expect("Method not found")
    }
}

/// The Across SpokePool contract interface
pub struct SpokePoolContract<M: Middleware> {
    contract: Contract<M>,
}

impl<M: Middleware> SpokePoolContract<M> {
    /// Creates a new instance of the contract
    pub fn new(address: Address, client: impl Into<Arc<M>>) -> Self {
        let abi = include_str!("../contracts/SpokePool.abi");
        let contract = Contract::new(
            address,
            serde_json::from_str::<EthersContract>(abi).expect("Invalid ABI"),
            client.into(),
        );
        Self { contract }
    }

    /// Submits a bridging deposit with a fill deadline relative to the
    /// current block time
    #[allow(clippy::too_many_arguments)]
    pub fn deposit_v3_now(
        &self,
        depositor: Address,
        recipient: Address,
        input_token: Address,
        output_token: Address,
        input_amount: U256,
        output_amount: U256,
        destination_chain_id: U256,
        exclusive_relayer: Address,
        fill_deadline_offset: u32,
        exclusivity_deadline: u32,
        message: Bytes,
    ) -> ContractCall<M, ()> {
        self.contract
            .method(
                "depositV3Now",
                (
                    depositor,
                    recipient,
                    input_token,
                    output_token,
                    input_amount,
                    output_amount,
                    destination_chain_id,
                    exclusive_relayer,
                    fill_deadline_offset,
                    exclusivity_deadline,
                    message,
                ),
            )
            .expect("Method not found")
    }
}
