//! Seed data for the orders view: the fixed 100-record set `#CM9801..#CM9900`.

use chrono::{DateTime, TimeZone, Utc};

use super::aggregate::{Order, OrderId, OrderStatus as S};

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn o(
    id: &str,
    user: &str,
    project: &str,
    address: &str,
    date_label: &str,
    date_sort: DateTime<Utc>,
    status: S,
) -> Order {
    Order::new(OrderId::new(id), user, project, address, date_label, date_sort, status)
}

/// Initial in-memory record set. New orders are prepended in front of these.
pub fn seed_orders() -> Vec<Order> {
    vec![
        o("#CM9801", "Natali Craig", "Landing Page", "Meadow Lane Oakland", "Just now", ts(2024, 2, 28, 10, 0), S::InProgress),
        o("#CM9802", "Kate Morrison", "CRM Admin pages", "Larry San Francisco", "A minute ago", ts(2024, 2, 28, 9, 59), S::Complete),
        o("#CM9803", "Drew Cano", "Client Project", "Bagwell Avenue Ocala", "1 hour ago", ts(2024, 2, 28, 9, 0), S::Pending),
        o("#CM9804", "Orlando Diggs", "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", ts(2024, 2, 27, 10, 0), S::Approved),
        o("#CM9805", "Andi Lane", "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", ts(2023, 2, 2, 10, 0), S::Rejected),
        o("#CM9806", "John Smith", "E-commerce Site", "Broadway New York", "Feb 3, 2023", ts(2023, 2, 3, 10, 0), S::InProgress),
        o("#CM9807", "Sarah Johnson", "Portfolio Website", "Sunset Boulevard LA", "Feb 4, 2023", ts(2023, 2, 4, 10, 0), S::Complete),
        o("#CM9808", "Mike Davis", "Mobile App", "Michigan Avenue Chicago", "Feb 5, 2023", ts(2023, 2, 5, 10, 0), S::Pending),
        o("#CM9809", "Emma Wilson", "Dashboard Redesign", "Pine Street Seattle", "Feb 6, 2023", ts(2023, 2, 6, 10, 0), S::Approved),
        o("#CM9810", "Alex Brown", "Marketing Site", "Oak Street Portland", "Feb 7, 2023", ts(2023, 2, 7, 10, 0), S::Complete),
        o("#CM9811", "Lisa Garcia", "Data Analytics Platform", "Main Street Boston", "Feb 8, 2023", ts(2023, 2, 8, 10, 0), S::InProgress),
        o("#CM9812", "David Miller", "Learning Management System", "University Avenue Austin", "Feb 9, 2023", ts(2023, 2, 9, 10, 0), S::Pending),
        o("#CM9813", "Rachel Green", "Event Management App", "Festival Street Miami", "Feb 10, 2023", ts(2023, 2, 10, 10, 0), S::Rejected),
        o("#CM9814", "Tom Anderson", "Inventory System", "Industrial Park Denver", "Feb 11, 2023", ts(2023, 2, 11, 10, 0), S::Complete),
        o("#CM9815", "Jennifer Lee", "Healthcare Portal", "Medical Center Phoenix", "Feb 12, 2023", ts(2023, 2, 12, 10, 0), S::Approved),
        o("#CM9816", "Brian White", "Job Board App", "King Street Charleston", "Feb 13, 2023", ts(2023, 2, 13, 10, 0), S::Pending),
        o("#CM9817", "Olivia Moore", "HR Management Tool", "Queen Street Toronto", "Feb 14, 2023", ts(2023, 2, 14, 10, 0), S::Complete),
        o("#CM9818", "Ethan Taylor", "Design System", "Creative Avenue Atlanta", "Feb 15, 2023", ts(2023, 2, 15, 10, 0), S::InProgress),
        o("#CM9819", "Sophia Martin", "Disaster Response Portal", "Firehouse Road Houston", "Feb 16, 2023", ts(2023, 2, 16, 10, 0), S::Approved),
        o("#CM9820", "Daniel Walker", "Recipe App", "Baker Street London", "Feb 17, 2023", ts(2023, 2, 17, 10, 0), S::Rejected),
        o("#CM9821", "Ella Harris", "Customer Support Dashboard", "Helpdesk Lane Dallas", "Feb 18, 2023", ts(2023, 2, 18, 10, 0), S::InProgress),
        o("#CM9822", "Logan Martinez", "Student Portal", "Campus Circle Raleigh", "Feb 19, 2023", ts(2023, 2, 19, 10, 0), S::Pending),
        o("#CM9823", "Grace Thompson", "Farm Management System", "Harvest Road Boise", "Feb 20, 2023", ts(2023, 2, 20, 10, 0), S::Complete),
        o("#CM9824", "Henry Scott", "Safety Compliance App", "Rescue Blvd Tampa", "Feb 21, 2023", ts(2023, 2, 21, 10, 0), S::Approved),
        o("#CM9825", "Chloe Adams", "Travel Booking Platform", "Aviation Road Nashville", "Feb 22, 2023", ts(2023, 2, 22, 10, 0), S::InProgress),
        o("#CM9826", "Lucas Mitchell", "Telemedicine App", "Wellness Drive Baltimore", "Feb 23, 2023", ts(2023, 2, 23, 10, 0), S::Complete),
        o("#CM9827", "Amelia Perez", "Space Education Portal", "Galaxy Street Houston", "Feb 24, 2023", ts(2023, 2, 24, 10, 0), S::Pending),
        o("#CM9828", "Jack Rivera", "AgriTech CRM", "Greenfield Road Fresno", "Feb 25, 2023", ts(2023, 2, 25, 10, 0), S::Rejected),
        o("#CM9829", "Zoe Cooper", "Music Collaboration App", "Harmony Lane Austin", "Feb 26, 2023", ts(2023, 2, 26, 10, 0), S::Complete),
        o("#CM9830", "Nathan Bell", "Lab Management System", "Science Park San Diego", "Feb 27, 2023", ts(2023, 2, 27, 10, 0), S::Approved),
        o("#CM9831", "Mia Rodriguez", "Fitness Tracker App", "Gym Street Los Angeles", "Feb 28, 2023", ts(2023, 2, 28, 10, 0), S::InProgress),
        o("#CM9832", "William Chen", "Restaurant POS System", "Dining District Chicago", "Mar 1, 2023", ts(2023, 3, 1, 10, 0), S::Complete),
        o("#CM9833", "Emily Johnson", "Real Estate Platform", "Property Lane New York", "Mar 2, 2023", ts(2023, 3, 2, 10, 0), S::Pending),
        o("#CM9834", "James Wilson", "Social Media Dashboard", "Tech Hub San Francisco", "Mar 3, 2023", ts(2023, 3, 3, 10, 0), S::Approved),
        o("#CM9835", "Isabella Martinez", "E-Learning Platform", "Education Boulevard Boston", "Mar 4, 2023", ts(2023, 3, 4, 10, 0), S::InProgress),
        o("#CM9836", "Michael Davis", "Supply Chain Software", "Logistics Park Houston", "Mar 5, 2023", ts(2023, 3, 5, 10, 0), S::Rejected),
        o("#CM9837", "Sophia Anderson", "Banking Application", "Financial District Miami", "Mar 6, 2023", ts(2023, 3, 6, 10, 0), S::Complete),
        o("#CM9838", "Alexander Taylor", "Video Streaming Service", "Media Center Los Angeles", "Mar 7, 2023", ts(2023, 3, 7, 10, 0), S::Pending),
        o("#CM9839", "Charlotte Moore", "Insurance Portal", "Policy Drive Dallas", "Mar 8, 2023", ts(2023, 3, 8, 10, 0), S::Approved),
        o("#CM9840", "Ethan Jackson", "IoT Management System", "Smart City Seattle", "Mar 9, 2023", ts(2023, 3, 9, 10, 0), S::InProgress),
        o("#CM9841", "Ava White", "Legal Case Management", "Court Square Washington", "Mar 10, 2023", ts(2023, 3, 10, 10, 0), S::Complete),
        o("#CM9842", "Benjamin Harris", "Gaming Platform", "Arcade Avenue Las Vegas", "Mar 11, 2023", ts(2023, 3, 11, 10, 0), S::Pending),
        o("#CM9843", "Mia Clark", "Health Monitoring App", "Medical Plaza Phoenix", "Mar 12, 2023", ts(2023, 3, 12, 10, 0), S::Approved),
        o("#CM9844", "Daniel Lewis", "Construction Management", "Build Site Denver", "Mar 13, 2023", ts(2023, 3, 13, 10, 0), S::InProgress),
        o("#CM9845", "Emily Robinson", "Pet Care Platform", "Veterinary Street Portland", "Mar 14, 2023", ts(2023, 3, 14, 10, 0), S::Complete),
        o("#CM9846", "Joseph Walker", "Cryptocurrency Exchange", "Blockchain Hub Austin", "Mar 15, 2023", ts(2023, 3, 15, 10, 0), S::Rejected),
        o("#CM9847", "Madison Hall", "Travel Planning App", "Airport Road Orlando", "Mar 16, 2023", ts(2023, 3, 16, 10, 0), S::Pending),
        o("#CM9848", "Andrew Allen", "Restaurant Reservation System", "Foodie District New Orleans", "Mar 17, 2023", ts(2023, 3, 17, 10, 0), S::Approved),
        o("#CM9849", "Elizabeth Young", "Environmental Monitoring", "Green Tech Park San Francisco", "Mar 18, 2023", ts(2023, 3, 18, 10, 0), S::InProgress),
        o("#CM9850", "Christopher King", "Sports Management Platform", "Stadium Boulevard Los Angeles", "Mar 19, 2023", ts(2023, 3, 19, 10, 0), S::Complete),
        o("#CM9851", "Sofia Wright", "Virtual Event Platform", "Convention Center Chicago", "Mar 20, 2023", ts(2023, 3, 20, 10, 0), S::Pending),
        o("#CM9852", "Matthew Lopez", "Food Delivery App", "Restaurant Row Miami", "Mar 21, 2023", ts(2023, 3, 21, 10, 0), S::Approved),
        o("#CM9853", "Avery Hill", "Smart Home Controller", "Tech Village Seattle", "Mar 22, 2023", ts(2023, 3, 22, 10, 0), S::InProgress),
        o("#CM9854", "Joshua Scott", "Non-Profit Management", "Charity Lane Boston", "Mar 23, 2023", ts(2023, 3, 23, 10, 0), S::Complete),
        o("#CM9855", "Ella Green", "Podcast Platform", "Studio District Nashville", "Mar 24, 2023", ts(2023, 3, 24, 10, 0), S::Rejected),
        o("#CM9856", "Ryan Adams", "Logistics Tracking System", "Warehouse Park Atlanta", "Mar 25, 2023", ts(2023, 3, 25, 10, 0), S::Pending),
        o("#CM9857", "Scarlett Baker", "Art Gallery Platform", "Museum Mile New York", "Mar 26, 2023", ts(2023, 3, 26, 10, 0), S::Approved),
        o("#CM9858", "Nathan Nelson", "Fitness Class Booking", "Wellness Center Portland", "Mar 27, 2023", ts(2023, 3, 27, 10, 0), S::InProgress),
        o("#CM9859", "Grace Carter", "Car Rental Service", "Auto Mall Dallas", "Mar 28, 2023", ts(2023, 3, 28, 10, 0), S::Complete),
        o("#CM9860", "Samuel Mitchell", "Language Learning App", "Education Plaza Washington", "Mar 29, 2023", ts(2023, 3, 29, 10, 0), S::Pending),
        o("#CM9861", "Victoria Perez", "Home Services Marketplace", "Service Hub Houston", "Mar 30, 2023", ts(2023, 3, 30, 10, 0), S::Approved),
        o("#CM9862", "David Roberts", "Music Streaming Platform", "Sound Studio Los Angeles", "Mar 31, 2023", ts(2023, 3, 31, 10, 0), S::InProgress),
        o("#CM9863", "Chloe Turner", "Wedding Planning App", "Bridal Boulevard Miami", "Apr 1, 2023", ts(2023, 4, 1, 10, 0), S::Complete),
        o("#CM9864", "Oliver Phillips", "Investment Portfolio Tracker", "Financial Street New York", "Apr 2, 2023", ts(2023, 4, 2, 10, 0), S::Rejected),
        o("#CM9865", "Lily Campbell", "Book Club Platform", "Library Lane Chicago", "Apr 3, 2023", ts(2023, 4, 3, 10, 0), S::Pending),
        o("#CM9866", "Evan Parker", "Garden Management App", "Botanical Center Seattle", "Apr 4, 2023", ts(2023, 4, 4, 10, 0), S::Approved),
        o("#CM9867", "Zoe Evans", "Photography Portfolio", "Gallery District Portland", "Apr 5, 2023", ts(2023, 4, 5, 10, 0), S::InProgress),
        o("#CM9868", "Gabriel Edwards", "Parking Management System", "Transit Hub Boston", "Apr 6, 2023", ts(2023, 4, 6, 10, 0), S::Complete),
        o("#CM9869", "Hannah Collins", "Volunteer Coordination App", "Community Center Atlanta", "Apr 7, 2023", ts(2023, 4, 7, 10, 0), S::Pending),
        o("#CM9870", "Christian Stewart", "Vintage Marketplace", "Antique Row San Francisco", "Apr 8, 2023", ts(2023, 4, 8, 10, 0), S::Approved),
        o("#CM9871", "Aria Sanchez", "Mental Health App", "Wellness Park Los Angeles", "Apr 9, 2023", ts(2023, 4, 9, 10, 0), S::InProgress),
        o("#CM9872", "Dylan Morris", "Brewery Management System", "Craft Beer District Portland", "Apr 10, 2023", ts(2023, 4, 10, 10, 0), S::Complete),
        o("#CM9873", "Penelope Rogers", "Senior Care Platform", "Elder Care Center Phoenix", "Apr 11, 2023", ts(2023, 4, 11, 10, 0), S::Rejected),
        o("#CM9874", "Owen Reed", "Sustainable Living App", "Eco Park Seattle", "Apr 12, 2023", ts(2023, 4, 12, 10, 0), S::Pending),
        o("#CM9875", "Layla Cook", "Tourism Guide Platform", "Visitor Center Orlando", "Apr 13, 2023", ts(2023, 4, 13, 10, 0), S::Approved),
        o("#CM9876", "Julian Morgan", "Startup Incubator Portal", "Innovation Hub Austin", "Apr 14, 2023", ts(2023, 4, 14, 10, 0), S::InProgress),
        o("#CM9877", "Nora Bell", "Pet Adoption Platform", "Animal Shelter Denver", "Apr 15, 2023", ts(2023, 4, 15, 10, 0), S::Complete),
        o("#CM9878", "Levi Murphy", "Co-working Space Manager", "Office Hub San Francisco", "Apr 16, 2023", ts(2023, 4, 16, 10, 0), S::Pending),
        o("#CM9879", "Hazel Bailey", "Fashion Marketplace", "Style District Miami", "Apr 17, 2023", ts(2023, 4, 17, 10, 0), S::Approved),
        o("#CM9880", "Aaron Rivera", "Renovation Management App", "Construction Zone Chicago", "Apr 18, 2023", ts(2023, 4, 18, 10, 0), S::InProgress),
        o("#CM9881", "Luna Cooper", "Board Game Platform", "Game Store Los Angeles", "Apr 19, 2023", ts(2023, 4, 19, 10, 0), S::Complete),
        o("#CM9882", "Isaac Richardson", "Rental Property Manager", "Real Estate Hub New York", "Apr 20, 2023", ts(2023, 4, 20, 10, 0), S::Rejected),
        o("#CM9883", "Stella Cox", "Coffee Shop POS", "Cafe District Portland", "Apr 21, 2023", ts(2023, 4, 21, 10, 0), S::Pending),
        o("#CM9884", "Miles Howard", "Sports Betting Platform", "Arena Boulevard Las Vegas", "Apr 22, 2023", ts(2023, 4, 22, 10, 0), S::Approved),
        o("#CM9885", "Aurora Ward", "Yoga Class Booking", "Wellness Studio Seattle", "Apr 23, 2023", ts(2023, 4, 23, 10, 0), S::InProgress),
        o("#CM9886", "Gabriel Torres", "Freelancer Marketplace", "Gig Economy Hub Austin", "Apr 24, 2023", ts(2023, 4, 24, 10, 0), S::Complete),
        o("#CM9887", "Ivy Peterson", "Antique Auction Platform", "Heritage Lane Boston", "Apr 25, 2023", ts(2023, 4, 25, 10, 0), S::Pending),
        o("#CM9888", "Luke Gray", "Movie Theater Booking", "Cinema Complex Los Angeles", "Apr 26, 2023", ts(2023, 4, 26, 10, 0), S::Approved),
        o("#CM9889", "Maya James", "Plant Care App", "Garden Center Miami", "Apr 27, 2023", ts(2023, 4, 27, 10, 0), S::InProgress),
        o("#CM9890", "Leo Watson", "Music Festival Platform", "Concert Grounds Nashville", "Apr 28, 2023", ts(2023, 4, 28, 10, 0), S::Complete),
        o("#CM9891", "Willow Brooks", "Smart City Dashboard", "Tech Plaza San Francisco", "Apr 29, 2023", ts(2023, 4, 29, 10, 0), S::Rejected),
        o("#CM9892", "Jason Kelly", "Bike Sharing System", "Transit Hub Portland", "Apr 30, 2023", ts(2023, 4, 30, 10, 0), S::Pending),
        o("#CM9893", "Ruby Sanders", "Art Commission Platform", "Creative District Austin", "May 1, 2023", ts(2023, 5, 1, 10, 0), S::Approved),
        o("#CM9894", "Adam Bennett", "Food Waste Reduction App", "Sustainability Center Seattle", "May 2, 2023", ts(2023, 5, 2, 10, 0), S::InProgress),
        o("#CM9895", "Evelyn Wood", "Virtual Reality Classroom", "Education Tech Hub Boston", "May 3, 2023", ts(2023, 5, 3, 10, 0), S::Complete),
        o("#CM9896", "Jonathan Barnes", "Home Security System", "Security Park Los Angeles", "May 4, 2023", ts(2023, 5, 4, 10, 0), S::Pending),
        o("#CM9897", "Claire Ross", "Sustainable Fashion App", "Eco Fashion District Miami", "May 5, 2023", ts(2023, 5, 5, 10, 0), S::Approved),
        o("#CM9898", "Nathaniel Henderson", "Local Event Discovery", "Community Hub Chicago", "May 6, 2023", ts(2023, 5, 6, 10, 0), S::InProgress),
        o("#CM9899", "Hannah Coleman", "Digital Library System", "Knowledge Center New York", "May 7, 2023", ts(2023, 5, 7, 10, 0), S::Complete),
        o("#CM9900", "Tyler Jenkins", "Marine Biology Research", "Ocean Institute Miami", "May 8, 2023", ts(2023, 5, 8, 10, 0), S::Rejected),
    ]
}
