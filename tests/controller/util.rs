//! Request payload factories shared across controller tests.

use lifeline::model::{
    blood_request::CreateBloodRequestDto, donor::CreateDonorDto, hospital::CreateHospitalDto,
};

pub fn create_donor_dto(n: u32) -> CreateDonorDto {
    CreateDonorDto {
        full_name: format!("Donor {}", n),
        age: 30,
        gender: "Male".to_string(),
        blood_type: "O+".to_string(),
        location: "Algiers".to_string(),
        phone: format!("+21355510{:04}", n),
        email: format!("donor{}@email.dz", n),
    }
}

pub fn create_hospital_dto(n: u32) -> CreateHospitalDto {
    CreateHospitalDto {
        name: format!("Hospital {}", n),
        location: "Algiers".to_string(),
        phone: format!("+21355520{:04}", n),
        email: format!("hospital{}@email.dz", n),
        address: Some(format!("{} Main Street", n)),
        contact_person: Some(format!("Dr. Contact {}", n)),
    }
}

pub fn create_blood_request_dto(n: u32) -> CreateBloodRequestDto {
    CreateBloodRequestDto {
        hospital_name: format!("Hospital {}", n),
        blood_type: "A+".to_string(),
        units_needed: 3,
        urgency_level: "urgent".to_string(),
        location: "Algiers".to_string(),
        phone: format!("+21355530{:04}", n),
        email: format!("requests{}@email.dz", n),
    }
}
