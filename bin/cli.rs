//! CLI tool for deploying and operating the Loan Manager contract.

use loan_manager::deployment::VARIABLES;
use loan_manager::errors::revert_reason;
use loan_manager::loan_manager::contract::LoanManagerInitArgs;
use loan_manager::mocks::{MockAddressesProvider, MockCurvePool, MockLendingPool, MockToken};
use loan_manager::{LoanManager, ProtocolAddresses};
use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, NoArgs};
use odra::prelude::{Address, Addressable, OdraError};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

const DEPLOY_GAS: u64 = 500_000_000_000;
const MOCK_DEPLOY_GAS: u64 = 300_000_000_000;
const CALL_GAS: u64 = 300_000_000_000;

/// Deploys the Loan Manager against existing protocol contracts.
pub struct LoanManagerDeployScript {
    network: ProtocolAddresses,
}

impl DeployScript for LoanManagerDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let network = &self.network;
        let manager = LoanManager::load_or_deploy(
            env,
            LoanManagerInitArgs {
                lending_pool_address_provider: network.lending_pool_address_provider,
                curve_pool: network.curve_pool,
                curve_deposit: network.curve_deposit,
                curve_lp_token: network.curve_lp_token,
                dai: network.dai,
                usdc: network.usdc,
                usdt: network.usdt,
            },
            container,
            DEPLOY_GAS
        )?;

        println!("LoanManager deployed at {:?}", manager.address());
        Ok(())
    }
}

/// Deploys mock protocols and a Loan Manager wired to them.
pub struct LocalLoanManagerDeployScript;

impl LocalLoanManagerDeployScript {
    /// Mock tokens share one contract type, so they are deployed directly
    /// instead of through the named container entry.
    fn token(env: &HostEnv, symbol: &str) -> Result<Address, odra_cli::deploy::Error> {
        use loan_manager::mocks::token::MockTokenInitArgs;

        env.set_gas(MOCK_DEPLOY_GAS);
        let token = MockToken::try_deploy(
            env,
            MockTokenInitArgs {
                symbol: String::from(symbol),
                decimals: 18,
            },
        )?;
        println!("{symbol} mock deployed at {:?}", token.address());
        Ok(token.address().clone())
    }
}

impl DeployScript for LocalLoanManagerDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use loan_manager::mocks::curve_pool::MockCurvePoolInitArgs;
        use loan_manager::mocks::lending_pool::MockAddressesProviderInitArgs;

        let dai = Self::token(env, "DAI")?;
        let usdc = Self::token(env, "USDC")?;
        let usdt = Self::token(env, "USDT")?;
        let lp = Self::token(env, "am3CRV")?;

        let lending_pool = MockLendingPool::load_or_deploy(env, NoArgs, container, MOCK_DEPLOY_GAS)?;
        let provider = MockAddressesProvider::load_or_deploy(
            env,
            MockAddressesProviderInitArgs {
                lending_pool: lending_pool.address().clone(),
            },
            container,
            MOCK_DEPLOY_GAS
        )?;
        let curve_pool = MockCurvePool::load_or_deploy(
            env,
            MockCurvePoolInitArgs {
                coins: vec![dai, usdc, usdt],
                lp_token: lp,
            },
            container,
            MOCK_DEPLOY_GAS
        )?;

        let manager = LoanManager::load_or_deploy(
            env,
            LoanManagerInitArgs {
                lending_pool_address_provider: provider.address().clone(),
                curve_pool: curve_pool.address().clone(),
                // the mock pool takes underlying coins directly
                curve_deposit: curve_pool.address().clone(),
                curve_lp_token: lp,
                dai,
                usdc,
                usdt,
            },
            container,
            DEPLOY_GAS
        )?;

        println!("LoanManager deployed at {:?} on mock protocols", manager.address());
        Ok(())
    }
}

/// Print the fixed revert reason of a gate error before passing it on.
fn report(error: OdraError) -> OdraError {
    if let Some(reason) = revert_reason(&error) {
        eprintln!("Reverted: {reason}");
    }
    error
}

/// Scenario to reassign the worker.
pub struct SetWorkerScenario;

impl Scenario for SetWorkerScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "worker",
            "Address of the new worker",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let worker = args.get_single::<Address>("worker")?;

        env.set_gas(CALL_GAS);
        manager.try_set_worker(worker).map_err(report)?;

        println!("Worker set to {:?}", worker);
        Ok(())
    }
}

impl ScenarioMetadata for SetWorkerScenario {
    const NAME: &'static str = "set-worker";
    const DESCRIPTION: &'static str = "Assigns the account allowed to borrow, stake, unstake and repay";
}

fn token_and_amount_args() -> Vec<CommandArg> {
    vec![
        CommandArg::new("token", "Stablecoin address", NamedCLType::Key),
        CommandArg::new("amount", "Token amount", NamedCLType::U256),
    ]
}

fn token_arg() -> Vec<CommandArg> {
    vec![CommandArg::new("token", "Token address", NamedCLType::Key)]
}

/// Scenario to borrow a stablecoin and stake it into Curve.
pub struct BorrowAndStakeScenario;

impl Scenario for BorrowAndStakeScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_and_amount_args()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let token = args.get_single::<Address>("token")?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(CALL_GAS);
        let lp_minted = manager.try_borrow_and_stake(token, amount).map_err(report)?;

        println!("Borrowed and staked {amount}, minted {lp_minted} LP");
        Ok(())
    }
}

impl ScenarioMetadata for BorrowAndStakeScenario {
    const NAME: &'static str = "borrow-and-stake";
    const DESCRIPTION: &'static str = "Borrows a stablecoin from the lending pool and stakes it into Curve";
}

/// Scenario to unstake a stablecoin and repay the lending pool.
pub struct UnstakeAndRepayScenario;

impl Scenario for UnstakeAndRepayScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_and_amount_args()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let token = args.get_single::<Address>("token")?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(CALL_GAS);
        let repaid = manager.try_unstake_and_repay(token, amount).map_err(report)?;

        println!("Unstaked {amount}, repaid {repaid}");
        Ok(())
    }
}

impl ScenarioMetadata for UnstakeAndRepayScenario {
    const NAME: &'static str = "unstake-and-repay";
    const DESCRIPTION: &'static str = "Unstakes a stablecoin from Curve and repays the lending pool";
}

/// Scenario to send the contract's token balance to the owner.
pub struct WithdrawScenario;

impl Scenario for WithdrawScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_arg()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(CALL_GAS);
        let amount = manager.try_withdraw(token).map_err(report)?;

        println!("Withdrew {amount} to owner");
        Ok(())
    }
}

impl ScenarioMetadata for WithdrawScenario {
    const NAME: &'static str = "withdraw";
    const DESCRIPTION: &'static str = "Sends the contract's whole token balance to the owner";
}

/// Scenario to close the lending pool position for a token.
pub struct WithdrawFromAaveScenario;

impl Scenario for WithdrawFromAaveScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_arg()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(CALL_GAS);
        let amount = manager.try_withdraw_from_aave(token).map_err(report)?;

        println!("Withdrew {amount} from the lending pool to owner");
        Ok(())
    }
}

impl ScenarioMetadata for WithdrawFromAaveScenario {
    const NAME: &'static str = "withdraw-from-aave";
    const DESCRIPTION: &'static str = "Closes the lending pool position and sends the proceeds to the owner";
}

/// Scenario to unwind the Curve position into one stablecoin.
pub struct WithdrawFromCurveScenario;

impl Scenario for WithdrawFromCurveScenario {
    fn args(&self) -> Vec<CommandArg> {
        token_arg()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut manager = container.contract_ref::<LoanManager>(env)?;
        let token = args.get_single::<Address>("token")?;

        env.set_gas(CALL_GAS);
        let amount = manager.try_withdraw_from_curve(token).map_err(report)?;

        println!("Withdrew {amount} from Curve to owner");
        Ok(())
    }
}

impl ScenarioMetadata for WithdrawFromCurveScenario {
    const NAME: &'static str = "withdraw-from-curve";
    const DESCRIPTION: &'static str = "Unwinds the Curve position into one stablecoin and sends it to the owner";
}

/// Main function to run the CLI tool.
pub fn main() {
    let cli = OdraCli::new().about("CLI tool for the Loan Manager contract");

    // Live protocol addresses come from the environment, otherwise mocks are deployed
    let lookup = |var: &str| std::env::var(var).ok();
    let cli = match ProtocolAddresses::from_lookup(lookup) {
        Ok(Some(network)) => cli.deploy(LoanManagerDeployScript { network }),
        Ok(None) => {
            println!("None of {} is set, using mock protocols", VARIABLES.join(", "));
            cli.deploy(LocalLoanManagerDeployScript)
        }
        Err(err) => {
            eprintln!("Invalid network configuration: {err}");
            std::process::exit(1);
        }
    };

    cli
        // Contract references
        .contract::<LoanManager>()
        // Scenarios
        .scenario(SetWorkerScenario)
        .scenario(BorrowAndStakeScenario)
        .scenario(UnstakeAndRepayScenario)
        .scenario(WithdrawScenario)
        .scenario(WithdrawFromAaveScenario)
        .scenario(WithdrawFromCurveScenario)
        .build()
        .run();
}
