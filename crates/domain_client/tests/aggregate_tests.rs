//! Aggregate-level behavior of clients owning contracts

use core_kernel::Currency;
use domain_client::{Contract, ContractCostCalculator};
use rust_decimal_macros::dec;
use test_utils::{
    assert_active, assert_money_eq, assert_terminated, ClientBuilder, ContactFixtures,
    ContractBuilder, MoneyFixtures, TemporalFixtures,
};

#[test]
fn test_adding_the_same_contract_twice_is_a_no_op() {
    let mut client = ClientBuilder::new().build();
    let contract = ContractBuilder::for_client(client.id).build();

    client.add_contract(contract.clone());
    client.add_contract(contract);
    assert_eq!(client.contracts.len(), 1);
}

#[test]
fn test_active_contracts_skip_ended_ones() {
    let mut client = ClientBuilder::new().build();
    let open = ContractBuilder::for_client(client.id).build();
    let ended = ContractBuilder::for_client(client.id).already_ended().build();

    assert_active(&open);
    assert_terminated(&ended);

    client.add_contract(open.clone());
    client.add_contract(ended);

    let active = client.active_contracts();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, open.id);
    assert!(client.is_active());
}

#[test]
fn test_terminate_all_leaves_past_end_dates_untouched() {
    let mut client = ClientBuilder::new().build();
    let ended = ContractBuilder::for_client(client.id).already_ended().build();
    let original_end = ended.end_date;
    client.add_contract(ended);
    client.add_contract(ContractBuilder::for_client(client.id).build());

    client.terminate_all_contracts();

    assert!(!client.is_active());
    assert_eq!(client.contracts[0].end_date, original_end);
    assert!(client.contracts[1].end_date.is_some());
}

#[test]
fn test_total_cost_over_active_contracts_only() {
    let mut client = ClientBuilder::new().build();
    client.add_contract(
        ContractBuilder::for_client(client.id)
            .with_cost(MoneyFixtures::chf_100())
            .build(),
    );
    client.add_contract(
        ContractBuilder::for_client(client.id)
            .with_cost(MoneyFixtures::chf_150_50())
            .build(),
    );
    client.add_contract(
        ContractBuilder::for_client(client.id)
            .with_cost(MoneyFixtures::chf_100())
            .already_ended()
            .build(),
    );

    let active: Vec<Contract> = client.active_contracts().into_iter().cloned().collect();
    let total = ContractCostCalculator
        .calculate_total_cost(&active)
        .unwrap();
    assert_money_eq(total, core_kernel::Money::chf(dec!(250.50)).unwrap());
}

#[test]
fn test_company_client_has_no_age() {
    let company = ClientBuilder::new()
        .with_name("Acme SA")
        .as_company(ContactFixtures::company_identifier())
        .build();

    assert_eq!(company.age(), None);
    assert_eq!(company.is_major(), None);
    assert_eq!(
        company.display_info(),
        "Company: Acme SA (CHE-123.456.789)"
    );
}

#[test]
fn test_person_age_and_majority() {
    let person = ClientBuilder::new().build();

    let age = person.age().unwrap();
    assert!(age >= 36, "born 1990-05-20, age was {age}");
    assert_eq!(person.is_major(), Some(true));
    assert_eq!(person.email.value(), "jean.dupont@example.com");
}

#[test]
fn test_dated_contract_window_and_duration() {
    let client = ClientBuilder::new()
        .with_email(ContactFixtures::other_email())
        .build();
    let contract = ContractBuilder::for_client(client.id)
        .starting(TemporalFixtures::past_start_date())
        .ending(TemporalFixtures::far_future_date())
        .build();

    assert_active(&contract);
    assert_eq!(contract.start_date, TemporalFixtures::past_start_date());
    assert!(contract.duration_in_days() > 365);
}

#[test]
fn test_total_cost_of_no_contracts_is_zero_chf() {
    let total = ContractCostCalculator.calculate_total_cost(&[]).unwrap();
    assert_money_eq(total, core_kernel::Money::zero(Currency::CHF));
}
