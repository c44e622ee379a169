//! Fixed startup dataset
//!
//! The store is initialized from this seed at boot; there is no external
//! fetch and no persistence, so every process start begins from the same
//! state (modulo the generated ids and timestamps).

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    models::{
        asset::{Asset, AssetStatus},
        category::Category,
        complaint::{Complaint, ComplaintStatus},
        employee::Employee,
        request::{AssetRequest, RequestStatus},
        user::{Role, User},
    },
    store::Store,
};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Populate an empty store with the fixed seed dataset
pub async fn seed(store: &Store) {
    let now = Utc::now();

    // Loginable identities
    let alice = User {
        id: new_id(),
        first_name: "Alice".to_string(),
        last_name: "Johnson".to_string(),
        email: "alice@example.com".to_string(),
        password: "password123".to_string(),
        role: Role::User,
        avatar: "https://i.pravatar.cc/150?img=1".to_string(),
    };
    let dave = User {
        id: new_id(),
        first_name: "Dave".to_string(),
        last_name: "Okafor".to_string(),
        email: "dave@example.com".to_string(),
        password: "password123".to_string(),
        role: Role::User,
        avatar: "https://i.pravatar.cc/150?img=12".to_string(),
    };
    let bob = User {
        id: new_id(),
        first_name: "Bob".to_string(),
        last_name: "Martinez".to_string(),
        email: "bob@example.com".to_string(),
        password: "password123".to_string(),
        role: Role::Manager,
        avatar: "https://i.pravatar.cc/150?img=3".to_string(),
    };
    let carol = User {
        id: new_id(),
        first_name: "Carol".to_string(),
        last_name: "Chen".to_string(),
        email: "carol@example.com".to_string(),
        password: "password123".to_string(),
        role: Role::Admin,
        avatar: "https://i.pravatar.cc/150?img=5".to_string(),
    };
    for user in [&alice, &dave, &bob, &carol] {
        store.users.insert(user.clone()).await;
    }

    // Categories
    for (name, description) in [
        ("Laptops", "Computing devices"),
        ("Phones", "Mobile communication devices"),
        ("Peripherals", "Computer accessories"),
        ("Furniture", "Office furniture"),
    ] {
        store
            .categories
            .insert(Category {
                id: new_id(),
                name: name.to_string(),
                description: description.to_string(),
            })
            .await;
    }

    // Assets; seeded oldest first so the prepend ordering holds
    let assets = [
        Asset {
            id: new_id(),
            name: "Standing Desk".to_string(),
            description: "Electric height-adjustable desk".to_string(),
            category: "Furniture".to_string(),
            serial_number: "SD-2023-014".to_string(),
            quantity: 2,
            purchase_price: 649.0,
            image: "https://images.example.com/assets/standing-desk.jpg".to_string(),
            status: AssetStatus::Maintenance,
            assigned_to: None,
            assigned_at: None,
            created_at: now - Duration::days(240),
        },
        Asset {
            id: new_id(),
            name: "Logitech MX Master 3".to_string(),
            description: "Wireless mouse".to_string(),
            category: "Peripherals".to_string(),
            serial_number: "MX-2024-101".to_string(),
            quantity: 12,
            purchase_price: 99.0,
            image: "https://images.example.com/assets/mx-master-3.jpg".to_string(),
            status: AssetStatus::Available,
            assigned_to: None,
            assigned_at: None,
            created_at: now - Duration::days(180),
        },
        Asset {
            id: new_id(),
            name: "iPhone 15".to_string(),
            description: "Company phone".to_string(),
            category: "Phones".to_string(),
            serial_number: "IP-2024-033".to_string(),
            quantity: 4,
            purchase_price: 899.0,
            image: "https://images.example.com/assets/iphone-15.jpg".to_string(),
            status: AssetStatus::Assigned,
            assigned_to: Some(dave.id.clone()),
            assigned_at: Some(now - Duration::days(60)),
            created_at: now - Duration::days(120),
        },
        Asset {
            id: new_id(),
            name: "Dell XPS 15".to_string(),
            description: "Developer laptop".to_string(),
            category: "Laptops".to_string(),
            serial_number: "XPS-2024-007".to_string(),
            quantity: 3,
            purchase_price: 1899.0,
            image: "https://images.example.com/assets/dell-xps-15.jpg".to_string(),
            status: AssetStatus::Available,
            assigned_to: None,
            assigned_at: None,
            created_at: now - Duration::days(90),
        },
        Asset {
            id: new_id(),
            name: "MacBook Pro 16".to_string(),
            description: "M3 Pro, 36 GB RAM".to_string(),
            category: "Laptops".to_string(),
            serial_number: "MBP-2024-001".to_string(),
            quantity: 1,
            purchase_price: 2799.0,
            image: "https://images.example.com/assets/macbook-pro-16.jpg".to_string(),
            status: AssetStatus::Assigned,
            assigned_to: Some(alice.id.clone()),
            assigned_at: Some(now - Duration::days(30)),
            created_at: now - Duration::days(45),
        },
    ];
    let alice_macbook_id = assets[4].id.clone();
    for asset in assets {
        store.assets.insert(asset).await;
    }

    // Requests
    store
        .requests
        .insert(AssetRequest {
            id: new_id(),
            user_id: dave.id.clone(),
            user_name: dave.display_name(),
            asset_type: "Monitor".to_string(),
            reason: "Second screen for code reviews".to_string(),
            status: RequestStatus::Approved,
            date: now - Duration::days(20),
            updated_at: Some(now - Duration::days(18)),
        })
        .await;
    store
        .requests
        .insert(AssetRequest {
            id: new_id(),
            user_id: alice.id.clone(),
            user_name: alice.display_name(),
            asset_type: "Headset".to_string(),
            reason: "Current headset microphone is broken".to_string(),
            status: RequestStatus::Pending,
            date: now - Duration::days(3),
            updated_at: None,
        })
        .await;

    // Complaints
    store
        .complaints
        .insert(Complaint {
            id: new_id(),
            user_id: alice.id.clone(),
            user_name: alice.display_name(),
            asset_id: alice_macbook_id,
            asset_name: "MacBook Pro 16".to_string(),
            description: "Screen flickers when the lid is half open".to_string(),
            status: ComplaintStatus::Open,
            date: now - Duration::days(2),
            updated_at: None,
        })
        .await;

    // Employees; mirrors the identity list plus staff without a login
    let employees = [
        ("Alice", "Johnson", "alice@example.com", "Engineering", Role::User, 1),
        ("Dave", "Okafor", "dave@example.com", "Engineering", Role::User, 12),
        ("Bob", "Martinez", "bob@example.com", "Operations", Role::Manager, 3),
        ("Carol", "Chen", "carol@example.com", "IT", Role::Admin, 5),
        ("Erin", "Novak", "erin@example.com", "Design", Role::User, 7),
        ("Frank", "Lindqvist", "frank@example.com", "Marketing", Role::User, 9),
    ];
    for (i, (first, last, email, department, role, img)) in employees.into_iter().enumerate() {
        store
            .employees
            .insert(Employee {
                id: new_id(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                department: department.to_string(),
                role,
                avatar: format!("https://i.pravatar.cc/150?img={}", img),
                created_at: now - Duration::days(300 - i as i64),
            })
            .await;
    }

    let users = store.users.list().await.len();
    let assets = store.assets.count().await;
    let requests = store.requests.count().await;
    let complaints = store.complaints.count().await;
    let employees = store.employees.count().await;
    let categories = store.categories.count().await;
    tracing::info!(
        users,
        assets,
        requests,
        complaints,
        employees,
        categories,
        "Seed dataset loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_upholds_assignment_invariant() {
        let store = Store::new();
        seed(&store).await;

        for asset in store.assets.list().await {
            assert!(
                asset.assignment_consistent(),
                "seed asset {} violates assignment invariant",
                asset.name
            );
        }
    }

    #[tokio::test]
    async fn seed_contains_one_identity_per_role() {
        let store = Store::new();
        seed(&store).await;

        let users = store.users.list().await;
        assert!(users.iter().any(|u| u.role == Role::User));
        assert!(users.iter().any(|u| u.role == Role::Manager));
        assert!(users.iter().any(|u| u.role == Role::Admin));
        assert!(store.users.find_by_email("alice@example.com").await.is_some());
    }
}
