use staffdesk_hr::domain::types::{RequestKind, RequestStatus};
use staffdesk_hr::error::HrServiceError;
use staffdesk_hr::infra::memstore::InMemoryRequestRepository;
use staffdesk_hr::usecase::request::{
    CreateRequestInput, CreateRequestUseCase, GetRequestUseCase, ListRequestsUseCase,
    UpdateRequestInput, UpdateRequestUseCase,
};

fn equipment_input(email: &str) -> CreateRequestInput {
    CreateRequestInput {
        kind: RequestKind::Equipment,
        employee_email: email.to_owned(),
        employee_role: None,
        items: "Laptop (x1), Monitor (x2)".to_owned(),
        status: None,
    }
}

#[tokio::test]
async fn should_create_request_with_defaults() {
    let requests = InMemoryRequestRepository::new();

    let usecase = CreateRequestUseCase {
        requests: requests.clone(),
    };
    let request = usecase
        .execute(equipment_input("alice@example.com"))
        .await
        .unwrap();

    assert_eq!(request.id.len(), 7);
    assert_eq!(request.employee_role, "Normal User");
    assert_eq!(request.status, RequestStatus::Pending);

    let listed = ListRequestsUseCase { requests }.execute().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, request.id);
}

#[tokio::test]
async fn should_keep_explicit_role_and_status() {
    let usecase = CreateRequestUseCase {
        requests: InMemoryRequestRepository::new(),
    };

    let request = usecase
        .execute(CreateRequestInput {
            kind: RequestKind::Leave,
            employee_email: "admin@example.com".to_owned(),
            employee_role: Some("Admin".to_owned()),
            items: "Annual leave, 5 days".to_owned(),
            status: Some(RequestStatus::Approved),
        })
        .await
        .unwrap();

    assert_eq!(request.employee_role, "Admin");
    assert_eq!(request.status, RequestStatus::Approved);
}

#[tokio::test]
async fn should_get_request_by_id() {
    let requests = InMemoryRequestRepository::new();

    let created = CreateRequestUseCase {
        requests: requests.clone(),
    }
    .execute(equipment_input("alice@example.com"))
    .await
    .unwrap();

    let found = GetRequestUseCase { requests }
        .execute(&created.id)
        .await
        .unwrap();
    assert_eq!(found.employee_email, "alice@example.com");
    assert_eq!(found.kind, RequestKind::Equipment);
}

#[tokio::test]
async fn should_fail_get_of_missing_request() {
    let usecase = GetRequestUseCase {
        requests: InMemoryRequestRepository::new(),
    };

    let result = usecase.execute("zzzzzzz").await;
    assert!(
        matches!(result, Err(HrServiceError::NotFound)),
        "expected NotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_update_request_status_only() {
    let requests = InMemoryRequestRepository::new();

    let created = CreateRequestUseCase {
        requests: requests.clone(),
    }
    .execute(equipment_input("alice@example.com"))
    .await
    .unwrap();

    let updated = UpdateRequestUseCase { requests }
        .execute(
            &created.id,
            UpdateRequestInput {
                status: Some(RequestStatus::Approved),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Approved);
    // The rest of the record is untouched.
    assert_eq!(updated.items, created.items);
    assert_eq!(updated.employee_email, created.employee_email);
}

#[tokio::test]
async fn should_fail_update_of_missing_request() {
    let usecase = UpdateRequestUseCase {
        requests: InMemoryRequestRepository::new(),
    };

    let result = usecase.execute("zzzzzzz", UpdateRequestInput::default()).await;
    assert!(
        matches!(result, Err(HrServiceError::NotFound)),
        "expected NotFound, got {result:?}"
    );
}
